//! Built-in demonstration suite.
//!
//! Four small properties showing the harness surface: bounded alphanumeric
//! text, email well-formedness over generated lists, the classic sorting
//! invariants, and an intentionally false claim that shuffling is a no-op.
//! The last one is registered as expected-to-fail and exists to exercise
//! note capture and the expected-failure path; do not fix its assertion.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;

use crate::error::HoldfastResult;
use crate::generators::{emails, integers, lists, lists_of, randoms, RandomSource, Text};
use crate::notes::note;
use crate::suite::{PropertyTest, Suite};

/// Element counts, order-insensitive. The same idea as a counting multiset.
fn counts(xs: &[i64]) -> BTreeMap<i64, usize> {
    let mut map = BTreeMap::new();
    for x in xs {
        *map.entry(*x).or_insert(0) += 1;
    }
    map
}

/// Build the demonstration suite.
pub fn demo_suite() -> HoldfastResult<Suite> {
    let mut suite = Suite::new();

    suite.register(PropertyTest::new(
        "alphanumeric_text_is_alphanumeric_within_bounds",
        Text::alphanumeric(12, 64)?,
        |s: &String| {
            assert!(
                s.chars().all(|c| c.is_ascii_alphanumeric()),
                "non-alphanumeric character in {s:?}"
            );
            let len = s.chars().count();
            assert!((12..=64).contains(&len), "length {len} out of bounds");
        },
    ));

    suite.register(PropertyTest::new(
        "generated_emails_contain_exactly_one_at_sign",
        lists_of(emails(), 1, 10)?,
        |batch: &Vec<String>| {
            assert!(batch
                .iter()
                .all(|email| email.chars().filter(|c| *c == '@').count() == 1));
        },
    ));

    suite.register(PropertyTest::new(
        "sorting_integers_preserves_elements_in_order",
        lists(integers()),
        |xs: &Vec<i64>| {
            let mut sorted = xs.clone();
            sorted.sort_unstable();
            assert_eq!(sorted.len(), xs.len());
            assert_eq!(counts(&sorted), counts(xs), "sorting changed the multiset");
            assert!(sorted.windows(2).all(|w| w[0] <= w[1]), "not non-decreasing");
        },
    ));

    // Deliberately false: exists to demonstrate note capture and the
    // expected-failure reporting path.
    suite.register(
        PropertyTest::new(
            "shuffling_a_list_is_a_noop",
            (lists(integers()), randoms()),
            |(original, source): &(Vec<i64>, RandomSource)| {
                let mut shuffled = original.clone();
                let mut rng = source.rng();
                shuffled.shuffle(&mut rng);
                note(format!("shuffle: {shuffled:?}"));
                assert_eq!(*original, shuffled);
            },
        )
        .expect_failure("intentional failure to demonstrate note capture"),
    );

    Ok(suite)
}
