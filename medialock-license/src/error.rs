//! Error types for the licensing module.

use thiserror::Error;

/// Result type for license operations.
pub type LicenseResult<T> = Result<T, LicenseError>;

/// Licensing-specific errors.
#[derive(Debug, Error)]
pub enum LicenseError {
    /// No license has been persisted (missing or empty file).
    #[error("license file missing or empty")]
    Missing,

    /// The license does not match the expected digest for this identity.
    #[error("license rejected for this machine identity")]
    Rejected,

    /// Identifier or secret material failed to hex-decode.
    #[error("invalid hex material: {0}")]
    Decode(#[from] hex::FromHexError),

    /// Identifier decoded to the wrong length.
    #[error("invalid identifier length: expected {expected}, got {actual}")]
    InvalidIdLength { expected: usize, actual: usize },

    /// Underlying persistence failure.
    #[error("store error: {0}")]
    Store(#[from] medialock_store::StoreError),
}
