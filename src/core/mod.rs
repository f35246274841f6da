//! Core components for payment signature handling.
//!
//! This module contains the building blocks of the library: the canonical
//! message format, hash algorithm selection, the signature engine, and
//! error handling.

// Export cryptographic functionality
pub mod crypto;

// Canonical message construction
pub mod message;

// Signature engine
pub mod engine;

// Memory handling for secret-derived data
pub mod memory;

// Library constants
pub mod constants;

// Error handling
pub mod error;

// Re-exports for convenience
pub use self::constants::DEFAULT_HASH_ALGORITHM;
pub use self::crypto::config::HashAlgorithm;
pub use self::engine::{SignatureEngine, SignatureRequest};
pub use self::error::{Error, GenerationError, Result, ValidationError};
pub use self::message::CanonicalMessage;
