//! Bounded text generator: length uniform in `[min_size, max_size]`, each
//! character uniform over a caller-supplied alphabet.

use rand::rngs::StdRng;
use rand::Rng;

use crate::error::{HoldfastError, HoldfastResult};

use super::Generator;

/// ASCII letters and digits, the alphabet of the alphanumeric demos.
pub const ASCII_ALPHANUMERIC: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Bounded strings over a fixed alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    min_size: usize,
    max_size: usize,
    alphabet: Vec<char>,
}

impl Text {
    /// Build a text spec; configuration error on inverted bounds or an
    /// empty alphabet.
    pub fn new(min_size: usize, max_size: usize, alphabet: &str) -> HoldfastResult<Self> {
        if min_size > max_size {
            return Err(HoldfastError::InvalidBounds { min: min_size, max: max_size });
        }
        let alphabet: Vec<char> = alphabet.chars().collect();
        if alphabet.is_empty() {
            return Err(HoldfastError::EmptyAlphabet);
        }
        Ok(Self { min_size, max_size, alphabet })
    }

    /// Bounded ASCII-alphanumeric strings.
    pub fn alphanumeric(min_size: usize, max_size: usize) -> HoldfastResult<Self> {
        Self::new(min_size, max_size, ASCII_ALPHANUMERIC)
    }

    pub fn min_size(&self) -> usize {
        self.min_size
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    fn pick(&self, rng: &mut StdRng) -> char {
        self.alphabet[rng.random_range(0..self.alphabet.len())]
    }
}

impl Generator for Text {
    type Value = String;

    fn draw(&self, rng: &mut StdRng) -> String {
        let len = rng.random_range(self.min_size..=self.max_size);
        (0..len).map(|_| self.pick(rng)).collect()
    }

    fn shrink(&self, value: &String) -> Vec<String> {
        let chars: Vec<char> = value.chars().collect();
        let len = chars.len();
        let mut candidates = Vec::new();

        // Shorten toward min_size, largest cut first.
        if len > self.min_size {
            candidates.push(chars[..self.min_size].iter().collect());
            let half = self.min_size + (len - self.min_size) / 2;
            if half != self.min_size && half != len {
                candidates.push(chars[..half].iter().collect());
            }
            candidates.push(chars[..len - 1].iter().collect());
        }

        // Simplify content: same length, every char the first alphabet char.
        let simplest: String = std::iter::repeat(self.alphabet[0]).take(len).collect();
        if simplest != *value {
            candidates.push(simplest);
        }

        candidates.retain(|c| c != value);
        candidates.dedup();
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn new_rejects_inverted_bounds() {
        let err = Text::new(8, 3, "abc").unwrap_err();
        assert!(matches!(err, HoldfastError::InvalidBounds { min: 8, max: 3 }));
    }

    #[test]
    fn new_rejects_empty_alphabet() {
        let err = Text::new(0, 4, "").unwrap_err();
        assert!(matches!(err, HoldfastError::EmptyAlphabet));
    }

    #[test]
    fn accessors_report_configured_bounds() {
        let gen = Text::alphanumeric(12, 64).unwrap();
        assert_eq!(gen.min_size(), 12);
        assert_eq!(gen.max_size(), 64);
    }

    #[test]
    fn draw_respects_bounds_and_alphabet() {
        let gen = Text::new(2, 5, "xyz").unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let s = gen.draw(&mut rng);
            assert!((2..=5).contains(&s.chars().count()), "bad length: {s:?}");
            assert!(s.chars().all(|c| "xyz".contains(c)), "bad char in {s:?}");
        }
    }

    #[test]
    fn draw_handles_fixed_length() {
        let gen = Text::new(4, 4, "a").unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(gen.draw(&mut rng), "aaaa");
    }

    #[test]
    fn shrink_never_violates_bounds() {
        let gen = Text::new(2, 8, "ab").unwrap();
        for candidate in gen.shrink(&"babbabab".to_string()) {
            assert!((2..=8).contains(&candidate.len()), "bad candidate {candidate:?}");
            assert!(candidate.chars().all(|c| "ab".contains(c)));
        }
    }

    #[test]
    fn shrink_of_simplest_minimal_string_is_empty() {
        let gen = Text::new(2, 8, "ab").unwrap();
        assert!(gen.shrink(&"aa".to_string()).is_empty());
    }

    #[test]
    fn shrink_proposes_content_simplification_at_min_length() {
        let gen = Text::new(2, 8, "ab").unwrap();
        let candidates = gen.shrink(&"bb".to_string());
        assert_eq!(candidates, vec!["aa".to_string()]);
    }
}
