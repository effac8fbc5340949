//! Byte-stream persistence for MediaLock.
//!
//! The cryptographic core never touches the filesystem directly. Every
//! component that needs to read or write bytes is handed a [`ByteStore`]
//! capability; production wiring passes [`FsStore`], tests and embedders
//! that want no disk access pass [`MemStore`].
//!
//! Streams are whole-file: a read returns the full contents, a write
//! replaces them. Handles are opened, used, and released within each call.

mod error;
mod fs;
mod mem;

use std::path::Path;

pub use error::{StoreError, StoreResult};
pub use fs::FsStore;
pub use mem::MemStore;

/// Capability for reading and writing whole byte streams by path.
///
/// Implementations own the medium. Callers never see file handles.
pub trait ByteStore {
    /// Reads the full contents stored at `path`.
    fn read(&self, path: &Path) -> StoreResult<Vec<u8>>;

    /// Replaces the contents stored at `path`.
    fn write(&self, path: &Path, bytes: &[u8]) -> StoreResult<()>;
}
