//! Test registration and suite execution.
//!
//! A [`PropertyTest`] is a named registration record: a generator, a
//! property body, a sample count, and an optional expected-to-fail flag
//! with a reason (a plain field, not a language mechanism). A [`Suite`]
//! runs its tests sequentially and aggregates per-test outcomes into a
//! [`SuiteReport`] that drives the process exit status.

use serde::Serialize;

use crate::generators::Generator;
use crate::runner::{check, RunResult, DEFAULT_CASES};

/// One registered property test.
pub struct PropertyTest {
    name: String,
    cases: usize,
    expected_failure: Option<String>,
    run: Box<dyn Fn(u64, usize) -> RunResult>,
}

impl PropertyTest {
    /// Register `property` over samples from `gen` under `name`.
    pub fn new<G, F>(name: impl Into<String>, gen: G, property: F) -> Self
    where
        G: Generator + 'static,
        F: Fn(&G::Value) + 'static,
    {
        Self {
            name: name.into(),
            cases: DEFAULT_CASES,
            expected_failure: None,
            run: Box::new(move |seed, cases| check(&gen, cases, seed, &property)),
        }
    }

    /// Override the sample count (default 100).
    pub fn cases(mut self, cases: usize) -> Self {
        self.cases = cases;
        self
    }

    /// Mark this test as expected to fail, with a reason. A failure then
    /// counts as a pass for the run exit code; an actual pass is reported
    /// as an anomaly.
    pub fn expect_failure(mut self, reason: impl Into<String>) -> Self {
        self.expected_failure = Some(reason.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn case_count(&self) -> usize {
        self.cases
    }

    pub fn expected_failure(&self) -> Option<&str> {
        self.expected_failure.as_deref()
    }

    fn execute(&self, seed: u64, cases_override: Option<usize>) -> TestStatus {
        let cases = cases_override.unwrap_or(self.cases);
        let result = (self.run)(seed, cases);
        match (result, &self.expected_failure) {
            (RunResult::Pass { cases }, None) => TestStatus::Passed { cases },
            (RunResult::Pass { .. }, Some(reason)) => {
                TestStatus::UnexpectedPass { reason: reason.clone() }
            }
            (RunResult::Fail { counterexample, message, notes, case, shrink_steps }, None) => {
                TestStatus::Failed { counterexample, message, notes, case, shrink_steps }
            }
            (RunResult::Fail { counterexample, notes, .. }, Some(reason)) => {
                TestStatus::ExpectedFailure {
                    reason: reason.clone(),
                    counterexample,
                    notes,
                }
            }
        }
    }
}

/// Per-test outcome after classification against the expected-failure flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TestStatus {
    Passed {
        cases: usize,
    },
    Failed {
        counterexample: String,
        message: String,
        notes: Vec<String>,
        case: usize,
        shrink_steps: usize,
    },
    /// Declared expected-to-fail and did fail: overall pass.
    ExpectedFailure {
        reason: String,
        counterexample: String,
        notes: Vec<String>,
    },
    /// Declared expected-to-fail but passed: reported as an anomaly.
    UnexpectedPass {
        reason: String,
    },
}

impl TestStatus {
    /// True unless this is an unexpected failure.
    pub fn is_ok(&self) -> bool {
        !matches!(self, TestStatus::Failed { .. })
    }
}

/// A named outcome, one per executed test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestOutcome {
    pub name: String,
    #[serde(flatten)]
    pub status: TestStatus,
}

/// Aggregated results of one suite run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuiteReport {
    pub seed: u64,
    pub outcomes: Vec<TestOutcome>,
}

impl SuiteReport {
    pub fn passes(&self) -> usize {
        self.count(|s| matches!(s, TestStatus::Passed { .. }))
    }

    pub fn failures(&self) -> usize {
        self.count(|s| matches!(s, TestStatus::Failed { .. }))
    }

    pub fn expected_failures(&self) -> usize {
        self.count(|s| matches!(s, TestStatus::ExpectedFailure { .. }))
    }

    pub fn anomalies(&self) -> usize {
        self.count(|s| matches!(s, TestStatus::UnexpectedPass { .. }))
    }

    /// Exit-code semantics: success iff every test passed or failed as
    /// expected. Anomalous passes stay exit-neutral.
    pub fn is_success(&self) -> bool {
        self.failures() == 0
    }

    fn count(&self, pred: impl Fn(&TestStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }
}

/// An ordered collection of property tests.
#[derive(Default)]
pub struct Suite {
    tests: Vec<PropertyTest>,
}

impl Suite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, test: PropertyTest) {
        self.tests.push(test);
    }

    pub fn tests(&self) -> &[PropertyTest] {
        &self.tests
    }

    /// Run every registered test with the given run seed.
    pub fn run(&self, seed: u64) -> SuiteReport {
        self.run_filtered(seed, None, None)
    }

    /// Run tests whose names contain `filter` (all when `None`), optionally
    /// overriding each test's sample count.
    pub fn run_filtered(
        &self,
        seed: u64,
        filter: Option<&str>,
        cases_override: Option<usize>,
    ) -> SuiteReport {
        let outcomes = self
            .tests
            .iter()
            .filter(|t| filter.map_or(true, |f| t.name.contains(f)))
            .map(|t| TestOutcome {
                name: t.name.clone(),
                status: t.execute(seed, cases_override),
            })
            .collect();
        SuiteReport { seed, outcomes }
    }
}
