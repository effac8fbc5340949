//! Machine identity for license binding.
//!
//! A machine identifier is 16 random bytes, hex-encoded wherever it is
//! displayed or persisted. The shipped provider regenerates the identifier
//! on every call: it is not derived from hardware and does not survive the
//! process, so a license is effectively single-use per invocation.
//! [`IdentityProvider`] is the seam where a stable hardware-derived source
//! would be substituted without touching the authority.

use std::fmt;
use std::str::FromStr;

use medialock_crypto::SecureRandom;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{LicenseError, LicenseResult};

/// Length of a machine identifier in bytes.
pub const MACHINE_ID_SIZE: usize = 16;

/// An opaque identifier standing in for "this device".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MachineId([u8; MACHINE_ID_SIZE]);

impl MachineId {
    /// Draws a fresh identifier from `rng`.
    #[must_use]
    pub fn generate(rng: &mut dyn SecureRandom) -> Self {
        let mut bytes = [0u8; MACHINE_ID_SIZE];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Creates an identifier from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; MACHINE_ID_SIZE]) -> Self {
        Self(bytes)
    }

    /// Returns the identifier bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; MACHINE_ID_SIZE] {
        &self.0
    }

    /// Parses the hex form produced by `Display`.
    pub fn parse(s: &str) -> LicenseResult<Self> {
        let decoded = hex::decode(s.trim())?;
        if decoded.len() != MACHINE_ID_SIZE {
            return Err(LicenseError::InvalidIdLength {
                expected: MACHINE_ID_SIZE,
                actual: decoded.len(),
            });
        }
        let mut bytes = [0u8; MACHINE_ID_SIZE];
        bytes.copy_from_slice(&decoded);
        Ok(Self(bytes))
    }
}

impl fmt::Display for MachineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for MachineId {
    type Err = LicenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for MachineId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for MachineId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Source of the machine identifier used for license binding.
///
/// The authority never cares where identifiers come from; a provider backed
/// by stable hardware state plugs in here with no other change.
pub trait IdentityProvider {
    /// The identifier for "this device", as of this call.
    fn current_identity(&mut self) -> MachineId;
}

/// Provider that draws a brand-new random identifier on every call.
///
/// This matches the shipped protocol: identity is NOT stable across
/// invocations, so a license issued in one run will not validate in a later
/// one unless the identifier is captured externally. Resolve the identity
/// once per run and reuse the value.
pub struct EphemeralIdentity<R> {
    rng: R,
}

impl<R: SecureRandom> EphemeralIdentity<R> {
    /// Creates a provider drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: SecureRandom> IdentityProvider for EphemeralIdentity<R> {
    fn current_identity(&mut self) -> MachineId {
        MachineId::generate(&mut self.rng)
    }
}
