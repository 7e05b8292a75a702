//! Integer generator: uniform over a configurable range, shrinking toward
//! zero (or the in-range value nearest zero).

use rand::rngs::StdRng;
use rand::Rng;

use crate::error::{HoldfastError, HoldfastResult};

use super::Generator;

/// Uniform integers in `[low, high]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Integers {
    low: i64,
    high: i64,
}

impl Integers {
    /// Any value representable as an `i64`.
    pub fn any() -> Self {
        Self { low: i64::MIN, high: i64::MAX }
    }

    /// Uniform over `[low, high]`; configuration error if `low > high`.
    pub fn new(low: i64, high: i64) -> HoldfastResult<Self> {
        if low > high {
            return Err(HoldfastError::InvalidRange { low, high });
        }
        Ok(Self { low, high })
    }

    /// The in-range value closest to zero; shrinking moves toward it.
    fn shrink_target(&self) -> i64 {
        0i64.clamp(self.low, self.high)
    }
}

impl Generator for Integers {
    type Value = i64;

    fn draw(&self, rng: &mut StdRng) -> i64 {
        if self.low == i64::MIN && self.high == i64::MAX {
            rng.random()
        } else {
            rng.random_range(self.low..=self.high)
        }
    }

    fn shrink(&self, value: &i64) -> Vec<i64> {
        let target = self.shrink_target();
        if *value == target {
            return Vec::new();
        }
        // i128 arithmetic sidesteps overflow at the i64 extremes.
        let distance = *value as i128 - target as i128;
        let midpoint = (*value as i128 - distance / 2) as i64;
        let step = (*value as i128 - distance.signum()) as i64;

        let mut candidates = vec![target, midpoint, step];
        candidates.retain(|c| c != value);
        candidates.dedup();
        candidates
    }
}
