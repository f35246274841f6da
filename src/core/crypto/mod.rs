/*!
Cryptographic components for payment signature handling.

This module provides hash algorithm selection and digest computation. The
digests themselves come from the `sha2` crate; nothing here implements its
own cryptography.
*/

// Hash algorithm selection
pub mod config;

// Digest computation
pub mod hash;

// Re-export frequently used types
pub use config::{HashAlgorithm, SUPPORTED_ALGORITHMS};
