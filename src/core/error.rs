/*!
Error handling for signature generation and verification.
*/

use thiserror::Error;

/// Result type for signature operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for signature operations
#[derive(Error, Debug)]
pub enum Error {
    /// A required request field is missing or empty
    #[error("invalid signature request")]
    Validation(#[from] ValidationError),

    /// The requested hash algorithm is not available in this runtime
    #[error("unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Signature generation failed an internal post-condition
    #[error("signature generation failed")]
    Generation(#[from] GenerationError),
}

/// Validation errors for the signature request fields.
///
/// The webhook identifier is optional and never produces a validation
/// error; every other field must be non-empty.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Merchant id missing or empty
    #[error("merchant id is a required parameter and must not be empty")]
    MissingMerchantId,

    /// Secret key missing or empty
    #[error("secret key is a required parameter and must not be empty")]
    MissingSecretKey,

    /// Currency missing or empty
    #[error("currency is a required parameter and must not be empty")]
    MissingCurrency,

    /// Amount missing or empty
    #[error("amount is a required parameter and must not be empty")]
    MissingAmount,
}

impl ValidationError {
    /// Name of the offending request field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingMerchantId => "merchant_id",
            ValidationError::MissingSecretKey => "secret_key",
            ValidationError::MissingCurrency => "currency",
            ValidationError::MissingAmount => "amount",
        }
    }
}

/// Internal generation failures surfaced rather than swallowed
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationError {
    /// The encoded signature came out empty
    #[error("computed signature is empty")]
    EmptySignature,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_names_field() {
        assert_eq!(ValidationError::MissingMerchantId.field(), "merchant_id");
        assert_eq!(ValidationError::MissingSecretKey.field(), "secret_key");
        assert_eq!(ValidationError::MissingCurrency.field(), "currency");
        assert_eq!(ValidationError::MissingAmount.field(), "amount");
    }

    #[test]
    fn test_error_display() {
        let err = Error::UnsupportedAlgorithm("NOT-A-HASH".to_string());
        assert_eq!(err.to_string(), "unsupported hash algorithm: NOT-A-HASH");

        let err = Error::from(ValidationError::MissingSecretKey);
        assert_eq!(err.to_string(), "invalid signature request");
    }

    #[test]
    fn test_validation_error_source_is_preserved() {
        let err = Error::from(ValidationError::MissingAmount);
        match err {
            Error::Validation(inner) => assert_eq!(inner, ValidationError::MissingAmount),
            _ => panic!("Expected Validation error"),
        }
    }
}
