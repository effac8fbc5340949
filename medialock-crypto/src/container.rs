//! The encrypted container format.
//!
//! Layout is fixed: `key(16) || iv(16) || ciphertext`, no length prefixes.
//! The container carries its own decryption key, so possession of the blob
//! alone suffices to decrypt it. The license gate protects the command
//! path, not the artifact at rest. That property is deliberate, pinned by
//! tests, and must not be "fixed" here.

use crate::cipher::{decrypt, encrypt};
use crate::error::{CryptoError, CryptoResult};
use crate::key::{CipherKey, InitVector, IV_SIZE, KEY_SIZE};
use crate::rng::SecureRandom;

/// Minimum container length: the fixed key + IV header.
pub const HEADER_SIZE: usize = KEY_SIZE + IV_SIZE;

/// A decoded container: key material, IV, and ciphertext.
#[derive(Clone, Debug)]
pub struct EncryptedContainer {
    /// The key the ciphertext was produced under.
    pub key: CipherKey,
    /// The IV the ciphertext was produced under.
    pub iv: InitVector,
    /// The AES-CBC ciphertext.
    pub ciphertext: Vec<u8>,
}

impl EncryptedContainer {
    /// Serializes to the transportable `key || iv || ciphertext` layout.
    pub fn pack(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_SIZE + self.ciphertext.len());
        out.extend_from_slice(self.key.as_bytes());
        out.extend_from_slice(self.iv.as_bytes());
        out.extend_from_slice(&self.ciphertext);
        out
    }

    /// Splits a blob at the fixed offsets.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::TruncatedContainer`] when the input is shorter
    /// than the key + IV header. Nothing is decrypted on that path.
    pub fn unpack(blob: &[u8]) -> CryptoResult<Self> {
        if blob.len() < HEADER_SIZE {
            return Err(CryptoError::TruncatedContainer {
                min: HEADER_SIZE,
                actual: blob.len(),
            });
        }
        let mut key = [0u8; KEY_SIZE];
        key.copy_from_slice(&blob[..KEY_SIZE]);
        let mut iv = [0u8; IV_SIZE];
        iv.copy_from_slice(&blob[KEY_SIZE..HEADER_SIZE]);
        Ok(Self {
            key: CipherKey::from_bytes(key),
            iv: InitVector::from_bytes(iv),
            ciphertext: blob[HEADER_SIZE..].to_vec(),
        })
    }

    /// Total serialized size.
    pub fn len(&self) -> usize {
        HEADER_SIZE + self.ciphertext.len()
    }

    /// True if the container holds no ciphertext.
    pub fn is_empty(&self) -> bool {
        self.ciphertext.is_empty()
    }
}

/// Encrypts `plaintext` under a fresh key and IV and packs the result.
///
/// Both key and IV are drawn from `rng` at call time; neither is persisted
/// anywhere but inside the returned blob.
pub fn seal(plaintext: &[u8], rng: &mut dyn SecureRandom) -> Vec<u8> {
    let key = CipherKey::generate(rng);
    let iv = InitVector::generate(rng);
    let ciphertext = encrypt(plaintext, &key, &iv);
    EncryptedContainer { key, iv, ciphertext }.pack()
}

/// Unpacks `blob` and decrypts it with its embedded key and IV.
///
/// # Errors
///
/// Truncated input fails with [`CryptoError::TruncatedContainer`] before any
/// decryption is attempted; corrupted ciphertext surfaces as
/// [`CryptoError::Padding`].
pub fn open(blob: &[u8]) -> CryptoResult<Vec<u8>> {
    let container = EncryptedContainer::unpack(blob)?;
    decrypt(&container.ciphertext, &container.key, &container.iv)
}
