//! Error types for the persistence capability.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur when reading or writing a byte stream.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No entry exists at the given path.
    #[error("no entry at {path}")]
    NotFound {
        /// The path that was requested.
        path: PathBuf,
    },

    /// Underlying I/O failure, tagged with the path involved.
    #[error("i/o error at {path}: {source}")]
    Io {
        /// The path being read or written.
        path: PathBuf,
        /// The originating I/O error.
        #[source]
        source: std::io::Error,
    },
}
