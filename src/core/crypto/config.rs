/*!
Hash algorithm configuration for payment signatures.

This module provides runtime selection of the digest algorithm by name,
matching the names callers already exchange on the wire (for example
`"SHA-256"`).
*/

use crate::core::error::{Error, Result};

/// Supported hash algorithms for signature generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// SHA-224
    Sha224,
    /// SHA-256 - the algorithm both sides use unless agreed otherwise
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512 - largest digest, for callers wanting a wider margin
    Sha512,
}

impl Default for HashAlgorithm {
    fn default() -> Self {
        HashAlgorithm::Sha256
    }
}

/// Names of all supported algorithms, as accepted by [`HashAlgorithm::from_name`]
pub const SUPPORTED_ALGORITHMS: &[&str] = &["SHA-224", "SHA-256", "SHA-384", "SHA-512"];

impl HashAlgorithm {
    /// Resolve an algorithm by its wire name.
    ///
    /// Names are matched exactly; no case folding or normalization is
    /// applied, since both sides must already agree on the name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "SHA-224" => Ok(HashAlgorithm::Sha224),
            "SHA-256" => Ok(HashAlgorithm::Sha256),
            "SHA-384" => Ok(HashAlgorithm::Sha384),
            "SHA-512" => Ok(HashAlgorithm::Sha512),
            _ => Err(Error::UnsupportedAlgorithm(name.to_string())),
        }
    }

    /// Get the name of the algorithm as a string
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha224 => "SHA-224",
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha384 => "SHA-384",
            HashAlgorithm::Sha512 => "SHA-512",
        }
    }

    /// Size of this algorithm's digest in bytes
    pub fn digest_size(&self) -> usize {
        use crate::core::constants::sizes;
        match self {
            HashAlgorithm::Sha224 => sizes::SHA224_DIGEST_BYTES,
            HashAlgorithm::Sha256 => sizes::SHA256_DIGEST_BYTES,
            HashAlgorithm::Sha384 => sizes::SHA384_DIGEST_BYTES,
            HashAlgorithm::Sha512 => sizes::SHA512_DIGEST_BYTES,
        }
    }
}
