//! Key material for the MediaLock cipher.

use crate::error::{CryptoError, CryptoResult};
use crate::rng::SecureRandom;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Size of cipher keys in bytes (128-bit AES).
pub const KEY_SIZE: usize = 16;

/// Size of initialization vectors in bytes (one AES block).
pub const IV_SIZE: usize = 16;

/// A symmetric cipher key with automatic zeroization on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CipherKey {
    bytes: [u8; KEY_SIZE],
}

impl CipherKey {
    /// Draws a fresh key from `rng`.
    pub fn generate(rng: &mut dyn SecureRandom) -> Self {
        let mut bytes = [0u8; KEY_SIZE];
        rng.fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Creates a key from raw bytes.
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }

    /// Parses a key from its hex-encoded persistent form. Surrounding
    /// whitespace is tolerated.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not hex or decodes to a length other
    /// than [`KEY_SIZE`].
    pub fn from_hex(encoded: &str) -> CryptoResult<Self> {
        let decoded = hex::decode(encoded.trim())?;
        if decoded.len() != KEY_SIZE {
            return Err(CryptoError::InvalidKeyLength {
                expected: KEY_SIZE,
                actual: decoded.len(),
            });
        }
        let mut bytes = [0u8; KEY_SIZE];
        bytes.copy_from_slice(&decoded);
        Ok(Self { bytes })
    }

    /// Hex form used by the on-disk key store.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Returns the key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

impl std::fmt::Debug for CipherKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CipherKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// An initialization vector. Generated fresh per encryption; reusing an IV
/// under the same key is a confidentiality violation.
#[derive(Clone, Debug)]
pub struct InitVector {
    bytes: [u8; IV_SIZE],
}

impl InitVector {
    /// Draws a fresh IV from `rng`.
    pub fn generate(rng: &mut dyn SecureRandom) -> Self {
        let mut bytes = [0u8; IV_SIZE];
        rng.fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Creates an IV from raw bytes.
    pub fn from_bytes(bytes: [u8; IV_SIZE]) -> Self {
        Self { bytes }
    }

    /// Returns the IV bytes.
    pub fn as_bytes(&self) -> &[u8; IV_SIZE] {
        &self.bytes
    }
}
