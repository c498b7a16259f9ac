//! Error types for key validation and decryption

use thiserror::Error;

/// Errors from building a [`SecretBox`](crate::SecretBox) or opening a blob.
///
/// Entropy failure is deliberately absent: it halts instead of returning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CrypterError {
    /// Key text is not URL-safe, unpadded base64
    #[error("bad key: not valid base64")]
    BadEncoding,

    /// Key text decoded to the wrong number of bytes
    #[error("bad key length: expected {expected}, got {actual}")]
    BadLength {
        /// Required key length
        expected: usize,
        /// Decoded key length
        actual: usize,
    },

    /// Blob cannot even hold a nonce and an authentication tag
    #[error("data too small: need at least {minimum} bytes, got {actual}")]
    TooSmall {
        /// Minimum decryptable blob length
        minimum: usize,
        /// Actual blob length
        actual: usize,
    },

    /// Authentication failed (wrong key, wrong nonce or tampered data)
    #[error("decrypt failed")]
    AuthFailed,
}

impl CrypterError {
    /// Returns true if this error came from validating key text.
    ///
    /// Key errors are configuration problems and are worth reporting as
    /// such. Ciphertext errors mean the input blob cannot be trusted.
    pub fn is_key_error(&self) -> bool {
        match self {
            Self::BadEncoding | Self::BadLength { .. } => true,
            Self::TooSmall { .. } | Self::AuthFailed => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_errors_are_classified() {
        assert!(CrypterError::BadEncoding.is_key_error());
        assert!(CrypterError::BadLength { expected: 32, actual: 7 }.is_key_error());
    }

    #[test]
    fn ciphertext_errors_are_not_key_errors() {
        assert!(!CrypterError::TooSmall { minimum: 40, actual: 11 }.is_key_error());
        assert!(!CrypterError::AuthFailed.is_key_error());
    }

    #[test]
    fn error_display() {
        let err = CrypterError::BadLength { expected: 32, actual: 7 };
        assert_eq!(err.to_string(), "bad key length: expected 32, got 7");

        let err = CrypterError::TooSmall { minimum: 40, actual: 11 };
        assert_eq!(err.to_string(), "data too small: need at least 40 bytes, got 11");
    }

    #[test]
    fn auth_failure_carries_no_detail() {
        assert_eq!(CrypterError::AuthFailed.to_string(), "decrypt failed");
    }
}
