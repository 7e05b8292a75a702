//! Holdfast - small property-based test harness
//!
//! Holdfast generates randomized samples from declarative generator specs,
//! runs user-supplied properties against them, shrinks any counterexample
//! to a local minimum, and surfaces diagnostic notes only for the failing
//! invocation that gets reported.

pub mod demos;
pub mod error;
pub mod generators;
pub mod notes;
pub mod runner;
pub mod suite;

// Re-exports for convenience
pub use demos::demo_suite;
pub use error::{HoldfastError, HoldfastResult};
pub use generators::{
    emails, integers, integers_in, lists, lists_of, randoms, text, Emails, Generator, Integers,
    ListOf, RandomSource, Randoms, Text,
};
pub use notes::note;
pub use runner::{check, RunResult, DEFAULT_CASES, MAX_SHRINK_ATTEMPTS};
pub use suite::{PropertyTest, Suite, SuiteReport, TestOutcome, TestStatus};
