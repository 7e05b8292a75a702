//! Generator specs: declarative, composable descriptions of value domains.
//!
//! A generator is immutable once constructed and does two things: draw a
//! pseudo-random value from a seeded RNG, and propose strictly smaller
//! variants of a value for the shrink search. Every draw and every shrink
//! candidate satisfies the generator's own declared constraints: a
//! bounded-length text generator never yields a string outside its bounds,
//! shrunk or not.

use std::fmt;

use rand::rngs::StdRng;

mod emails;
mod integers;
mod lists;
mod randoms;
mod text;

pub use emails::Emails;
pub use integers::Integers;
pub use lists::ListOf;
pub use randoms::{RandomSource, Randoms};
pub use text::Text;

use crate::error::HoldfastResult;

/// A value domain that can be sampled and shrunk.
///
/// `draw` must be deterministic given the RNG state; `shrink` proposes
/// candidates no larger than `value` by the domain's size ordering
/// (magnitude for integers, length for text and lists), largest reduction
/// first.
pub trait Generator {
    type Value: Clone + fmt::Debug;

    /// Draw one sample from this domain.
    fn draw(&self, rng: &mut StdRng) -> Self::Value;

    /// Propose smaller variants of `value`, or an empty vec if `value` is
    /// already minimal.
    fn shrink(&self, value: &Self::Value) -> Vec<Self::Value>;
}

/// Tuple composition for multi-parameter properties: draws component-wise,
/// shrinks one component at a time.
impl<A: Generator, B: Generator> Generator for (A, B) {
    type Value = (A::Value, B::Value);

    fn draw(&self, rng: &mut StdRng) -> Self::Value {
        (self.0.draw(rng), self.1.draw(rng))
    }

    fn shrink(&self, value: &Self::Value) -> Vec<Self::Value> {
        let mut candidates = Vec::new();
        for a in self.0.shrink(&value.0) {
            candidates.push((a, value.1.clone()));
        }
        for b in self.1.shrink(&value.1) {
            candidates.push((value.0.clone(), b));
        }
        candidates
    }
}

/// Integers uniform over the full `i64` range.
pub fn integers() -> Integers {
    Integers::any()
}

/// Integers uniform over `[low, high]`. Fails fast if the range is inverted.
pub fn integers_in(low: i64, high: i64) -> HoldfastResult<Integers> {
    Integers::new(low, high)
}

/// Bounded text over a caller-supplied alphabet. Fails fast on inverted
/// bounds or an empty alphabet.
pub fn text(min_size: usize, max_size: usize, alphabet: &str) -> HoldfastResult<Text> {
    Text::new(min_size, max_size, alphabet)
}

/// Email-shaped strings: exactly one `@`, non-empty local and domain parts.
pub fn emails() -> Emails {
    Emails::new()
}

/// Lists of `element` with default length bounds (0 to 32 elements).
pub fn lists<G: Generator>(element: G) -> ListOf<G> {
    ListOf::unbounded(element)
}

/// Lists of `element` with `[min_size, max_size]` elements. Fails fast on
/// inverted bounds.
pub fn lists_of<G: Generator>(element: G, min_size: usize, max_size: usize) -> HoldfastResult<ListOf<G>> {
    ListOf::new(element, min_size, max_size)
}

/// Seeded random sources for properties that randomize internally.
pub fn randoms() -> Randoms {
    Randoms::new()
}
