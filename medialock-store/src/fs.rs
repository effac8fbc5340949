//! Filesystem-backed byte store.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::ByteStore;

/// Byte store backed by the local filesystem.
///
/// Each call opens, uses, and closes its file before returning; no handle
/// outlives the operation.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsStore;

impl ByteStore for FsStore {
    fn read(&self, path: &Path) -> StoreResult<Vec<u8>> {
        match fs::read(path) {
            Ok(bytes) => {
                debug!("read {} bytes from {}", bytes.len(), path.display());
                Ok(bytes)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Err(StoreError::NotFound {
                path: path.to_path_buf(),
            }),
            Err(err) => Err(StoreError::Io {
                path: path.to_path_buf(),
                source: err,
            }),
        }
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> StoreResult<()> {
        fs::write(path, bytes).map_err(|err| StoreError::Io {
            path: path.to_path_buf(),
            source: err,
        })?;
        debug!("wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }
}
