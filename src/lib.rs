/*!
# Payment Signature

A symmetric, shared-secret signature library for authenticating payment
transaction requests between a merchant backend and a payment processor.

## Overview

Both parties hold the same secret key and compute the same signature locally;
only the signature travels on the wire. This library provides:

- Deterministic canonical message construction from the transaction fields
  and the shared secret
- Signature generation as base64 text of a SHA-2 family digest
- Verification of an externally supplied signature against a freshly
  computed one
- Runtime hash algorithm selection by name, with SHA-256 as the default

Transport of the request and signature, credential storage, and webhook
delivery are owned by the caller. This crate is a pure function library:
every operation is a bounded in-memory computation with no I/O.

## Security Notes

- The shared secret is only ever used as hash input material. Buffers that
  embed it are wiped on drop, and `Debug` output for secret-bearing types is
  redacted.
- Signature comparison in [`SignatureEngine::verify`] is a plain string
  equality check, matching the established integration contract. See the
  method documentation before relying on it in a timing-sensitive setting.

## Example

```rust
use payment_signature::{SignatureEngine, SignatureRequest, DEFAULT_HASH_ALGORITHM};

# fn main() -> payment_signature::Result<()> {
let request = SignatureRequest {
    merchant_id: "123".to_string(),
    secret_key: "SecretKey".to_string(),
    currency: "EUR".to_string(),
    amount: "1000".to_string(),
    webhook_id: None,
};

let engine = SignatureEngine::new(&request)?;
let signature = engine.generate(DEFAULT_HASH_ALGORITHM)?;
assert!(engine.verify(&signature, DEFAULT_HASH_ALGORITHM)?);
# Ok(())
# }
```
*/

// Core components
pub mod core;

// Re-export commonly used types for convenience
pub use crate::core::constants::DEFAULT_HASH_ALGORITHM;
pub use crate::core::crypto::config::{HashAlgorithm, SUPPORTED_ALGORITHMS};
pub use crate::core::engine::{SignatureEngine, SignatureRequest};
pub use crate::core::error::{Error, GenerationError, Result, ValidationError};
pub use crate::core::memory::SecretBytes;
pub use crate::core::message::CanonicalMessage;
