/*!
Signature engine for payment transaction requests.

A symmetric signature is generated on the processor's servers and on the
merchant's backend from the same shared secret. The merchant sends its
signature along with the transaction request; the processor recomputes the
value and only processes the transaction when both sides arrive at the same
signature. The secret itself never travels.
*/

use std::fmt;

use base64::{Engine as _, engine::general_purpose};

use crate::core::crypto::config::HashAlgorithm;
use crate::core::crypto::hash;
use crate::core::error::{GenerationError, Result, ValidationError};
use crate::core::message::CanonicalMessage;

/// Transaction fields a signature is computed over.
///
/// - `merchant_id`: unique identifier of the merchant within the processor's
///   platform, acquired during sign-up
/// - `secret_key`: shared secret securing communication between merchant and
///   processor; treated as opaque and never logged
/// - `currency`: generally accepted form of money, for instance `"EUR"`
/// - `amount`: quantity of money in the specified currency, as decimal text.
///   Used verbatim; no numeric parsing or normalization
/// - `webhook_id`: optional event-notification identifier; `None` and
///   `Some("")` are equivalent
///
/// With `serde-support` enabled the request can be deserialized from caller
/// configuration. Note that serializing a request includes the secret key,
/// so only write it to trusted storage.
#[derive(Clone)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct SignatureRequest {
    /// Merchant identifier
    pub merchant_id: String,
    /// Shared secret key
    pub secret_key: String,
    /// ISO 4217 currency code
    pub currency: String,
    /// Amount as decimal text
    pub amount: String,
    /// Optional webhook identifier
    #[cfg_attr(feature = "serde-support", serde(default))]
    pub webhook_id: Option<String>,
}

// Redacted: the request carries the shared secret
impl fmt::Debug for SignatureRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignatureRequest")
            .field("merchant_id", &self.merchant_id)
            .field("secret_key", &"<redacted>")
            .field("currency", &self.currency)
            .field("amount", &self.amount)
            .field("webhook_id", &self.webhook_id)
            .finish()
    }
}

/// Generates and verifies symmetric transaction signatures.
///
/// The engine is constructed once per transaction request, holds the
/// canonical message derived from the request, and answers `generate` and
/// `verify` queries over it. It has no further state: both operations are
/// pure reads, so a single engine may be shared across threads without
/// coordination.
#[derive(Debug, Clone)]
pub struct SignatureEngine {
    canonical: CanonicalMessage,
}

impl SignatureEngine {
    /// Build an engine from a transaction request.
    ///
    /// Merchant id, secret key, currency, and amount must be non-empty;
    /// otherwise construction fails with a [`ValidationError`] naming the
    /// field. A missing webhook id is normalized to the empty string.
    pub fn new(request: &SignatureRequest) -> Result<Self> {
        if request.merchant_id.is_empty() {
            return Err(ValidationError::MissingMerchantId.into());
        }
        if request.secret_key.is_empty() {
            return Err(ValidationError::MissingSecretKey.into());
        }
        if request.currency.is_empty() {
            return Err(ValidationError::MissingCurrency.into());
        }
        if request.amount.is_empty() {
            return Err(ValidationError::MissingAmount.into());
        }

        let webhook_id = request.webhook_id.as_deref().unwrap_or("");
        let canonical = CanonicalMessage::new(
            &request.merchant_id,
            webhook_id,
            &request.currency,
            &request.amount,
            &request.secret_key,
        );

        Ok(Self { canonical })
    }

    /// The canonical message this engine signs
    pub fn canonical_message(&self) -> &CanonicalMessage {
        &self.canonical
    }

    /// Generate the signature under the algorithm named by `algorithm`.
    ///
    /// Fails with [`Error::UnsupportedAlgorithm`](crate::Error::UnsupportedAlgorithm)
    /// when the name is unknown. See [`generate_with`](Self::generate_with).
    pub fn generate(&self, algorithm: &str) -> Result<String> {
        self.generate_with(HashAlgorithm::from_name(algorithm)?)
    }

    /// Generate the signature: base64 text of the digest of the canonical
    /// message.
    ///
    /// Deterministic and side-effect free; the same engine and algorithm
    /// always produce the same output. An empty encoding result is
    /// unreachable under normal hash and base64 semantics but checked as an
    /// explicit post-condition.
    pub fn generate_with(&self, algorithm: HashAlgorithm) -> Result<String> {
        let digest = hash::digest(algorithm, self.canonical.as_bytes());
        let signature = general_purpose::STANDARD.encode(digest);

        if signature.is_empty() {
            return Err(GenerationError::EmptySignature.into());
        }

        Ok(signature)
    }

    /// Verify a signature supplied by the other party, resolving the
    /// algorithm by name.
    pub fn verify(&self, candidate: &str, algorithm: &str) -> Result<bool> {
        self.verify_with(candidate, HashAlgorithm::from_name(algorithm)?)
    }

    /// Verify a signature supplied by the other party.
    ///
    /// Recomputes the signature and compares. Returns `Ok(false)` for any
    /// mismatch, including an empty or malformed candidate; a mismatch is a
    /// normal outcome, not an error. Errors are only returned when computing
    /// the comparison signature itself fails.
    ///
    /// The comparison is a plain string equality check, not a constant-time
    /// one. This matches the established integration contract; callers
    /// needing timing-attack resistance should review this choice.
    pub fn verify_with(&self, candidate: &str, algorithm: HashAlgorithm) -> Result<bool> {
        let expected = self.generate_with(algorithm)?;
        Ok(expected == candidate)
    }
}
