//! Property tests for generator invariants: every draw satisfies the
//! generator's own declared constraints.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use holdfast::{emails, lists_of, text, Generator, HoldfastError, Text};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: text(12, 64, alphanumeric) never yields a sample outside
    /// [12, 64], nor one containing '!', '@', or whitespace.
    #[test]
    fn property_alphanumeric_text_respects_bounds(seed in any::<u64>()) {
        let gen = Text::alphanumeric(12, 64).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let sample = gen.draw(&mut rng);

        let len = sample.chars().count();
        prop_assert!((12..=64).contains(&len), "length {} from {:?}", len, sample);
        prop_assert!(sample.chars().all(|c| c.is_ascii_alphanumeric()));
        prop_assert!(!sample.contains('!'));
        prop_assert!(!sample.contains('@'));
        prop_assert!(!sample.chars().any(char::is_whitespace));
    }

    /// PROPERTY: text over an arbitrary alphabet stays within arbitrary
    /// valid bounds and the alphabet.
    #[test]
    fn property_text_respects_arbitrary_bounds(
        seed in any::<u64>(),
        min in 0usize..16,
        extra in 0usize..16,
        alphabet in "[a-z]{1,8}",
    ) {
        let gen = text(min, min + extra, &alphabet).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let sample = gen.draw(&mut rng);

        prop_assert!((min..=min + extra).contains(&sample.chars().count()));
        prop_assert!(sample.chars().all(|c| alphabet.contains(c)));
    }

    /// PROPERTY: inverted bounds are a construction-time error, before any
    /// sampling.
    #[test]
    fn property_inverted_bounds_fail_fast(min in 1usize..64, delta in 1usize..64) {
        let err = text(min + delta, min, "ab").unwrap_err();
        prop_assert!(
            matches!(err, HoldfastError::InvalidBounds { .. }),
            "expected InvalidBounds, got {:?}",
            err
        );

        let err = lists_of(emails(), min + delta, min).unwrap_err();
        prop_assert!(
            matches!(err, HoldfastError::InvalidBounds { .. }),
            "expected InvalidBounds, got {:?}",
            err
        );
    }

    /// PROPERTY: a list of 1 to 10 emails is never empty, never has more
    /// than 10 entries, and each entry contains exactly one '@'.
    #[test]
    fn property_email_lists_respect_bounds_and_shape(seed in any::<u64>()) {
        let gen = lists_of(emails(), 1, 10).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let batch = gen.draw(&mut rng);

        prop_assert!((1..=10).contains(&batch.len()), "length {}", batch.len());
        for email in &batch {
            prop_assert_eq!(email.chars().filter(|c| *c == '@').count(), 1);
            let (local, domain) = email.split_once('@').unwrap();
            prop_assert!(!local.is_empty());
            prop_assert!(!domain.is_empty());
        }
    }

    /// PROPERTY: draws are deterministic given a seed.
    #[test]
    fn property_draws_reproduce_for_a_seed(seed in any::<u64>()) {
        let gen = lists_of(emails(), 1, 10).unwrap();
        let a = gen.draw(&mut StdRng::seed_from_u64(seed));
        let b = gen.draw(&mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(a, b);
    }
}
