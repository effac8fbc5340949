//! Error types for the encryption layer.

use thiserror::Error;

/// Result type for crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur in cryptographic operations.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Key material failed to hex-decode.
    #[error("key material is not valid hex: {0}")]
    KeyDecode(#[from] hex::FromHexError),

    /// Invalid key length.
    #[error("invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// Invalid IV length.
    #[error("invalid iv length: expected {expected}, got {actual}")]
    InvalidIvLength { expected: usize, actual: usize },

    /// Padding was invalid after decryption (wrong key/IV or corrupted
    /// ciphertext). No partially decrypted data is ever surfaced.
    #[error("decryption failed: invalid padding")]
    Padding,

    /// Container blob shorter than the fixed key + IV header.
    #[error("container truncated: need at least {min} bytes, got {actual}")]
    TruncatedContainer { min: usize, actual: usize },
}
