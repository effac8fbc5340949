//! AES-128-CBC encryption with PKCS#7 padding.
//!
//! Deterministic given identical key/IV/plaintext. There is no
//! authentication tag: only padding validity is checked on decryption, so
//! ciphertext integrity is not verified. That limitation is part of the
//! container format this crate implements.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::error::{CryptoError, CryptoResult};
use crate::key::{CipherKey, InitVector};

type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;

/// Block size of the underlying cipher in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Encrypts `plaintext` under `key` and `iv`.
///
/// Output length is the next block multiple strictly greater than the
/// plaintext length; block-aligned input gains a full padding block.
pub fn encrypt(plaintext: &[u8], key: &CipherKey, iv: &InitVector) -> Vec<u8> {
    Aes128CbcEnc::new(key.as_bytes().into(), iv.as_bytes().into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext)
}

/// Decrypts `ciphertext` under `key` and `iv`.
///
/// # Errors
///
/// Returns [`CryptoError::Padding`] when the padding is invalid after
/// decryption, the usual symptom of a wrong key, a wrong IV, or corrupted
/// ciphertext. Input whose length is not a block multiple fails the same
/// way. No partially decrypted data is ever returned.
pub fn decrypt(ciphertext: &[u8], key: &CipherKey, iv: &InitVector) -> CryptoResult<Vec<u8>> {
    Aes128CbcDec::new(key.as_bytes().into(), iv.as_bytes().into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CryptoError::Padding)
}
