//! Injectable randomness source.
//!
//! Keys, IVs, and machine identifiers are all drawn through [`SecureRandom`]
//! rather than ambient global state, so a seeded source can stand in during
//! tests.

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};

/// Source of cryptographically secure random bytes.
pub trait SecureRandom {
    /// Fills `dest` with random bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]);
}

/// Operating-system randomness. The production source.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl SecureRandom for OsRandom {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        OsRng.fill_bytes(dest);
    }
}

/// Deterministic randomness replaying a fixed byte sequence per seed.
///
/// Test use only; never wire this into a production path.
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    /// Creates a source that replays the same sequence for a given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl SecureRandom for SeededRandom {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest);
    }
}
