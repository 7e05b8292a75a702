//! Property tests for the shrink search: candidates never grow, reported
//! counterexamples still fail, and empty lists satisfy universal
//! properties vacuously.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use holdfast::{check, integers, lists, lists_of, Generator, RunResult, Text};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: integer shrink candidates are strictly closer to zero.
    #[test]
    fn property_integer_shrink_candidates_are_smaller(value in any::<i64>()) {
        for candidate in integers().shrink(&value) {
            prop_assert!(
                (candidate as i128).abs() < (value as i128).abs(),
                "candidate {} not smaller than {}", candidate, value
            );
        }
    }

    /// PROPERTY: text shrink candidates never leave the declared bounds or
    /// alphabet, whatever the drawn sample.
    #[test]
    fn property_text_shrink_candidates_stay_in_bounds(seed in any::<u64>()) {
        let gen = Text::alphanumeric(12, 64).unwrap();
        let sample = gen.draw(&mut StdRng::seed_from_u64(seed));
        for candidate in gen.shrink(&sample) {
            prop_assert!((12..=64).contains(&candidate.chars().count()));
            prop_assert!(candidate.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    /// PROPERTY: list shrink candidates are no longer than the sample and
    /// never shorter than min_size.
    #[test]
    fn property_list_shrink_candidates_respect_size_ordering(seed in any::<u64>()) {
        let gen = lists_of(integers(), 1, 10).unwrap();
        let sample = gen.draw(&mut StdRng::seed_from_u64(seed));
        for candidate in gen.shrink(&sample) {
            prop_assert!(candidate.len() <= sample.len());
            prop_assert!(candidate.len() >= 1);
        }
    }

    /// PROPERTY: whatever the run seed, a falsified "all elements below
    /// 100" property shrinks to the boundary singleton [100].
    #[test]
    fn property_shrinking_finds_the_minimal_list(seed in any::<u64>()) {
        let result = check(&lists(integers()), 100, seed, |xs: &Vec<i64>| {
            assert!(xs.iter().all(|x| *x < 100));
        });
        match result {
            RunResult::Fail { counterexample, .. } => {
                prop_assert_eq!(counterexample, "[100]");
            }
            // A seed whose 100 draws all stay below 100 everywhere is
            // astronomically unlikely but not falsifiable here.
            RunResult::Pass { .. } => {}
        }
    }

    /// PROPERTY: vacuous truth; a generator pinned to empty lists passes
    /// any universally quantified property.
    #[test]
    fn property_empty_lists_are_vacuously_true(seed in any::<u64>()) {
        let gen = lists_of(integers(), 0, 0).unwrap();
        let result = check(&gen, 50, seed, |xs: &Vec<i64>| {
            assert!(xs.iter().all(|x| *x != *x));
        });
        prop_assert!(result.is_pass());
    }

    /// PROPERTY: the same run seed reproduces the identical run result,
    /// counterexample included.
    #[test]
    fn property_check_is_deterministic(seed in any::<u64>()) {
        let run = || check(&lists(integers()), 40, seed, |xs: &Vec<i64>| {
            assert!(xs.len() < 20);
        });
        prop_assert_eq!(run(), run());
    }
}
