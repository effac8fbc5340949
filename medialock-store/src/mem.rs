//! In-memory byte store for tests and diskless embedders.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::error::{StoreError, StoreResult};
use crate::ByteStore;

/// Byte store holding all entries in a map. Nothing touches the disk.
#[derive(Debug, Default)]
pub struct MemStore {
    entries: Mutex<HashMap<PathBuf, Vec<u8>>>,
}

impl MemStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if an entry exists at `path`.
    pub fn contains(&self, path: &Path) -> bool {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(path)
    }
}

impl ByteStore for MemStore {
    fn read(&self, path: &Path) -> StoreResult<Vec<u8>> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                path: path.to_path_buf(),
            })
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> StoreResult<()> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.to_path_buf(), bytes.to_vec());
        Ok(())
    }
}
