//! Random-source generator: hands the property body a seeded RNG of its
//! own, so the outer harness stays reproducible even when the property
//! performs further randomized operations (shuffling, sampling).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Generator;

/// A reproducible source of randomness for use inside a property body.
///
/// The sample is just the seed; each call to [`RandomSource::rng`] yields a
/// fresh `StdRng` at that seed, so a shrink re-run sees the identical
/// stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomSource {
    seed: u64,
}

impl RandomSource {
    pub fn from_seed(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// A seeded RNG for the property body's own randomization.
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }
}

/// Generator of [`RandomSource`] values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Randoms;

impl Randoms {
    pub fn new() -> Self {
        Self
    }
}

impl Generator for Randoms {
    type Value = RandomSource;

    fn draw(&self, rng: &mut StdRng) -> RandomSource {
        RandomSource::from_seed(rng.random())
    }

    // Seed magnitude is the only size ordering this domain has.
    fn shrink(&self, value: &RandomSource) -> Vec<RandomSource> {
        if value.seed == 0 {
            return Vec::new();
        }
        let mut candidates = vec![RandomSource::from_seed(0)];
        if value.seed > 1 {
            candidates.push(RandomSource::from_seed(value.seed / 2));
        }
        candidates
    }
}
