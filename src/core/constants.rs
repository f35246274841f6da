/*!
Constants for payment signature handling.
*/

/// Name of the hash algorithm used when the caller does not pick one.
///
/// Passed explicitly at the call site rather than applied silently, so the
/// engine itself carries no process-wide default.
pub const DEFAULT_HASH_ALGORITHM: &str = "SHA-256";

/// Digest size constants for the supported algorithms
pub mod sizes {
    /// Size of a SHA-224 digest in bytes
    pub const SHA224_DIGEST_BYTES: usize = 28;

    /// Size of a SHA-256 digest in bytes
    pub const SHA256_DIGEST_BYTES: usize = 32;

    /// Size of a SHA-384 digest in bytes
    pub const SHA384_DIGEST_BYTES: usize = 48;

    /// Size of a SHA-512 digest in bytes
    pub const SHA512_DIGEST_BYTES: usize = 64;
}
