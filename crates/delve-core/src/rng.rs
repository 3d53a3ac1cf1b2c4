//! Random number generation.
//!
//! Placement draws from a seeded ChaCha RNG so the same seed always digs the
//! same dungeon.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// A sequential source of uniform integers.
///
/// A generator owns one of these and draws from it in a fixed order, so a
/// deterministic source makes placement fully reproducible. Tests substitute
/// scripted sources.
pub trait RandomSource {
    /// Uniform integer in the half-open range `[lo, hi)`.
    ///
    /// Returns `lo` when the range is empty.
    fn in_range(&mut self, lo: i32, hi: i32) -> i32;
}

/// Production source wrapping ChaCha8.
///
/// Only the seed is serialized; deserializing rebuilds the stream from the
/// start.
#[derive(Debug, Clone)]
pub struct SeededRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl SeededRng {
    /// Source with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Source with a random seed.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this source was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRng {
    fn in_range(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..hi)
    }
}

impl Default for SeededRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl Serialize for SeededRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SeededRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(SeededRng::new(seed))
    }
}
