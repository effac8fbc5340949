//! License issuance and validation.
//!
//! A license is the hex-encoded `HMAC-SHA256(secret, machine_id)` digest.
//! Issuance is a pure function; validation recomputes the digest and
//! compares byte-for-byte against the presented token.

use std::fmt;
use std::path::Path;

use hmac::{Hmac, Mac};
use medialock_crypto::CipherKey;
use medialock_store::{ByteStore, StoreError};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use tracing::debug;

use crate::error::{LicenseError, LicenseResult};
use crate::identity::MachineId;

type HmacSha256 = Hmac<Sha256>;

/// A license token: the hex HMAC digest binding an identity to a secret.
///
/// Valid only relative to the exact (identity, secret) pair that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct License(String);

impl License {
    /// Wraps a raw token read from external input. Surrounding whitespace is
    /// trimmed (a trailing newline is tolerated on read, never written).
    #[must_use]
    pub fn from_token(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    /// Returns the token text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the token holds no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Issues and validates licenses bound to a machine identity.
pub struct LicenseAuthority;

impl LicenseAuthority {
    /// Computes the license for `identity` under `secret`.
    ///
    /// Deterministic: identical inputs always produce an identical license.
    #[must_use]
    pub fn issue(identity: &MachineId, secret: &CipherKey) -> License {
        let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
            unreachable!("HMAC-SHA256 accepts any key size");
        };
        mac.update(identity.as_bytes());
        License(hex::encode(mac.finalize().into_bytes()))
    }

    /// True iff `license` is exactly the digest [`issue`](Self::issue) would
    /// produce for this identity and secret.
    #[must_use]
    pub fn validate(identity: &MachineId, license: &License, secret: &CipherKey) -> bool {
        Self::issue(identity, secret) == *license
    }

    /// Validates against a hex-encoded secret.
    ///
    /// A secret that fails to decode is a validation failure, never a panic.
    #[must_use]
    pub fn validate_encoded(identity: &MachineId, license: &License, secret_hex: &str) -> bool {
        match CipherKey::from_hex(secret_hex) {
            Ok(secret) => Self::validate(identity, license, &secret),
            Err(err) => {
                debug!("secret rejected during validation: {err}");
                false
            }
        }
    }
}

/// Reads a persisted license token.
///
/// # Errors
///
/// A missing file and an empty (or whitespace-only) file are both
/// [`LicenseError::Missing`]; any other read failure is passed through.
pub fn load_license(store: &dyn ByteStore, path: &Path) -> LicenseResult<License> {
    let bytes = match store.read(path) {
        Ok(bytes) => bytes,
        Err(StoreError::NotFound { .. }) => return Err(LicenseError::Missing),
        Err(err) => return Err(err.into()),
    };
    let license = License::from_token(&String::from_utf8_lossy(&bytes));
    if license.is_empty() {
        return Err(LicenseError::Missing);
    }
    Ok(license)
}

/// Persists `license` as ASCII text, no trailing newline.
pub fn store_license(store: &dyn ByteStore, path: &Path, license: &License) -> LicenseResult<()> {
    store.write(path, license.as_str().as_bytes())?;
    debug!("license persisted to {}", path.display());
    Ok(())
}
