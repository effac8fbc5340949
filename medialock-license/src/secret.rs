//! The persisted shared secret.
//!
//! The secret key signs licenses; it lives hex-encoded in a key-store file.
//! Anything unreadable or malformed in that file is discarded and replaced
//! with a freshly generated key.

use std::path::Path;

use medialock_crypto::{CipherKey, SecureRandom};
use medialock_store::ByteStore;
use tracing::{debug, warn};

/// Loads, validates, or (re)creates the shared secret.
pub struct SecretKeyStore;

impl SecretKeyStore {
    /// Returns the secret stored at `path`, or generates and persists a new
    /// one.
    ///
    /// A stored value only survives if it hex-decodes to exactly the cipher
    /// key length; read failures, bad hex, and wrong lengths all trigger
    /// regeneration. Failing to persist the replacement is reported but not
    /// fatal: the in-memory key still serves the current run.
    pub fn load_or_generate(
        store: &dyn ByteStore,
        path: &Path,
        rng: &mut dyn SecureRandom,
    ) -> CipherKey {
        if let Some(key) = Self::load(store, path) {
            return key;
        }
        let key = CipherKey::generate(rng);
        match store.write(path, key.to_hex().as_bytes()) {
            Ok(()) => debug!("secret key persisted to {}", path.display()),
            Err(err) => warn!("could not persist secret key to {}: {err}", path.display()),
        }
        key
    }

    fn load(store: &dyn ByteStore, path: &Path) -> Option<CipherKey> {
        let bytes = match store.read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                debug!("no usable secret key at {}: {err}", path.display());
                return None;
            }
        };
        match CipherKey::from_hex(&String::from_utf8_lossy(&bytes)) {
            Ok(key) => Some(key),
            Err(err) => {
                warn!("stored secret key at {} rejected: {err}", path.display());
                None
            }
        }
    }
}
