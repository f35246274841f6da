/*!
Memory handling for secret-derived data.

The canonical message embeds the shared secret, so the buffer holding it is
wiped when it goes out of scope and never appears in `Debug` output.
*/

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// A byte buffer that zeroizes its contents on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBytes {
    inner: Vec<u8>,
}

impl SecretBytes {
    /// Wrap a buffer containing secret-derived material.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { inner: bytes }
    }

    /// Borrow the underlying bytes.
    ///
    /// Avoid keeping the returned slice around; use it as hash input and
    /// let it go.
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }

    /// Length of the buffer in bytes
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// Redacted: the buffer contains secret material
impl fmt::Debug for SecretBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBytes({} bytes)", self.inner.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_bytes() {
        let secret = SecretBytes::new(b"123EUR1000SecretKey".to_vec());
        assert_eq!(secret.as_bytes(), b"123EUR1000SecretKey");
        assert_eq!(secret.len(), 19);
        assert!(!secret.is_empty());
    }

    #[test]
    fn test_debug_output_is_redacted() {
        let secret = SecretBytes::new(b"SecretKey".to_vec());
        let rendered = format!("{:?}", secret);
        assert_eq!(rendered, "SecretBytes(9 bytes)");
        assert!(!rendered.contains("SecretKey"));
    }

    #[test]
    fn test_zeroize_clears_contents() {
        let mut secret = SecretBytes::new(vec![0xAA; 32]);
        secret.zeroize();
        assert!(secret.is_empty());
    }
}
