//! Symmetric encryption engine and container codec for MediaLock.
//!
//! This crate provides:
//! - AES-128-CBC encryption/decryption with PKCS#7 padding
//! - The `key || iv || ciphertext` container format
//! - Key and IV material types with zeroization
//! - An injectable randomness source for deterministic tests
//!
//! No key material is persisted here. Callers supply or receive keys through
//! the container codec; the engine itself is stateless.

mod cipher;
mod container;
mod error;
mod key;
mod rng;

pub use cipher::{decrypt, encrypt, BLOCK_SIZE};
pub use container::{open, seal, EncryptedContainer, HEADER_SIZE};
pub use error::{CryptoError, CryptoResult};
pub use key::{CipherKey, InitVector, IV_SIZE, KEY_SIZE};
pub use rng::{OsRandom, SecureRandom, SeededRandom};
