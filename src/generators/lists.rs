//! List generator: a length uniform in `[min_size, max_size]`, then that
//! many independent draws from an element generator.

use rand::rngs::StdRng;
use rand::Rng;

use crate::error::{HoldfastError, HoldfastResult};

use super::Generator;

/// Default upper length bound for `lists()` without explicit bounds.
pub(crate) const DEFAULT_MAX_LEN: usize = 32;

/// Lists of values drawn from a wrapped element generator.
#[derive(Debug, Clone)]
pub struct ListOf<G> {
    element: G,
    min_size: usize,
    max_size: usize,
}

impl<G: Generator> ListOf<G> {
    /// Build a list spec; configuration error if `min_size > max_size`.
    pub fn new(element: G, min_size: usize, max_size: usize) -> HoldfastResult<Self> {
        if min_size > max_size {
            return Err(HoldfastError::InvalidBounds { min: min_size, max: max_size });
        }
        Ok(Self { element, min_size, max_size })
    }

    /// Default bounds: zero to `DEFAULT_MAX_LEN` elements. An empty list
    /// is a legitimate sample; universally quantified properties hold
    /// vacuously on it.
    pub fn unbounded(element: G) -> Self {
        Self { element, min_size: 0, max_size: DEFAULT_MAX_LEN }
    }

    pub fn min_size(&self) -> usize {
        self.min_size
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }
}

impl<G: Generator> Generator for ListOf<G> {
    type Value = Vec<G::Value>;

    fn draw(&self, rng: &mut StdRng) -> Vec<G::Value> {
        let len = rng.random_range(self.min_size..=self.max_size);
        (0..len).map(|_| self.element.draw(rng)).collect()
    }

    fn shrink(&self, value: &Vec<G::Value>) -> Vec<Vec<G::Value>> {
        let len = value.len();
        let mut candidates: Vec<Vec<G::Value>> = Vec::new();

        // Fewer elements first, never below min_size: truncate hard, then
        // halve, then drop single elements.
        if len > self.min_size {
            candidates.push(value[..self.min_size].to_vec());
            let half = self.min_size + (len - self.min_size) / 2;
            if half != self.min_size && half != len {
                candidates.push(value[..half].to_vec());
            }
            for i in 0..len {
                let mut dropped = value.clone();
                dropped.remove(i);
                candidates.push(dropped);
            }
        }

        // Then smaller elements, one position at a time.
        for (i, elem) in value.iter().enumerate() {
            for smaller in self.element.shrink(elem) {
                let mut replaced = value.clone();
                replaced[i] = smaller;
                candidates.push(replaced);
            }
        }

        candidates
    }
}
