/*!
Canonical message construction.

Both sides of a transaction hash the exact same byte sequence. That sequence
is the concatenation of the transaction fields and the shared secret in a
fixed order, with no separators:

```text
merchant_id ++ webhook_id ++ currency ++ amount ++ secret_key
```

Every byte matters: the amount is used verbatim as text, so `"1000"` and
`"1000.00"` produce different messages and therefore different signatures.
*/

use crate::core::memory::SecretBytes;

/// The deterministic byte sequence both parties hash.
///
/// Immutable after construction. The buffer embeds the shared secret and is
/// wiped on drop.
#[derive(Debug, Clone)]
pub struct CanonicalMessage {
    bytes: SecretBytes,
}

impl CanonicalMessage {
    /// Concatenate the fields in canonical order.
    ///
    /// An absent webhook id must be passed as `""`; normalization happens in
    /// the engine constructor.
    pub(crate) fn new(
        merchant_id: &str,
        webhook_id: &str,
        currency: &str,
        amount: &str,
        secret_key: &str,
    ) -> Self {
        let mut bytes = Vec::with_capacity(
            merchant_id.len() + webhook_id.len() + currency.len() + amount.len() + secret_key.len(),
        );
        bytes.extend_from_slice(merchant_id.as_bytes());
        bytes.extend_from_slice(webhook_id.as_bytes());
        bytes.extend_from_slice(currency.as_bytes());
        bytes.extend_from_slice(amount.as_bytes());
        bytes.extend_from_slice(secret_key.as_bytes());

        Self {
            bytes: SecretBytes::new(bytes),
        }
    }

    /// The canonical bytes, ready for hashing
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_bytes()
    }

    /// Length of the canonical message in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the message is empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order() {
        let message = CanonicalMessage::new("123", "wh-42", "EUR", "1000", "SecretKey");
        assert_eq!(message.as_bytes(), b"123wh-42EUR1000SecretKey");
    }

    #[test]
    fn test_empty_webhook_id_contributes_nothing() {
        let message = CanonicalMessage::new("123", "", "EUR", "1000", "SecretKey");
        assert_eq!(message.as_bytes(), b"123EUR1000SecretKey");
        assert_eq!(message.len(), 19);
    }

    #[test]
    fn test_identical_fields_yield_identical_messages() {
        let a = CanonicalMessage::new("123", "", "EUR", "1000", "SecretKey");
        let b = CanonicalMessage::new("123", "", "EUR", "1000", "SecretKey");
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_amount_is_not_normalized() {
        let integral = CanonicalMessage::new("123", "", "EUR", "1000", "SecretKey");
        let decimal = CanonicalMessage::new("123", "", "EUR", "1000.00", "SecretKey");
        assert_ne!(integral.as_bytes(), decimal.as_bytes());
    }

    #[test]
    fn test_debug_output_is_redacted() {
        let message = CanonicalMessage::new("123", "", "EUR", "1000", "SecretKey");
        assert!(!format!("{:?}", message).contains("SecretKey"));
    }
}
