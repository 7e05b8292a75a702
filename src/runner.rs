//! Property executor.
//!
//! Draws N samples from a generator, invokes the property against each,
//! and treats a panic (an `assert!` family failure) as a falsification. On
//! the first counterexample the executor switches to shrink mode: a bounded
//! local search that repeatedly replaces the failing sample with a smaller
//! variant that still fails, then reports the locally minimal one together
//! with the notes captured during that minimal invocation.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::generators::Generator;
use crate::notes;

/// Default number of samples per property.
pub const DEFAULT_CASES: usize = 100;

/// Upper bound on property re-invocations during one shrink search.
pub const MAX_SHRINK_ATTEMPTS: usize = 4096;

/// Outcome of one property run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunResult {
    /// Every sample satisfied the property.
    Pass { cases: usize },
    /// A counterexample was found and shrunk to a local minimum.
    Fail {
        /// Debug rendering of the minimal failing sample.
        counterexample: String,
        /// Panic message from the failing assertion.
        message: String,
        /// Notes captured during the minimal failing invocation.
        notes: Vec<String>,
        /// Zero-based index of the sample that first falsified the property.
        case: usize,
        /// Number of successful shrink replacements.
        shrink_steps: usize,
    },
}

impl RunResult {
    pub fn is_pass(&self) -> bool {
        matches!(self, RunResult::Pass { .. })
    }
}

// The executor installs a silent panic hook while properties run so a
// shrink search does not spray hundreds of backtraces. Swapping the global
// hook is process-wide, so concurrent checks (parallel test threads)
// serialize on this lock.
static PANIC_HOOK: Mutex<()> = Mutex::new(());

struct HookGuard {
    previous: Option<Box<dyn Fn(&panic::PanicHookInfo<'_>) + Sync + Send + 'static>>,
}

impl HookGuard {
    fn install() -> Self {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(|_| {}));
        Self { previous: Some(previous) }
    }
}

impl Drop for HookGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            panic::set_hook(previous);
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "property panicked".to_string()
    }
}

/// Run the property once against `value`, clearing the note buffer first.
/// Notes from a passing invocation are discarded silently.
fn invoke<V, F: Fn(&V)>(property: &F, value: &V) -> Result<(), String> {
    notes::clear();
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| property(value))).map_err(panic_message);
    if outcome.is_ok() {
        notes::clear();
    }
    outcome
}

/// Check `property` against `cases` samples drawn from `gen`.
///
/// Deterministic given `seed`: one sub-seed per case is derived from a
/// master RNG, so a failure reproduces under the same run seed regardless
/// of how much randomness each draw consumes.
pub fn check<G, F>(gen: &G, cases: usize, seed: u64, property: F) -> RunResult
where
    G: Generator,
    F: Fn(&G::Value),
{
    let lock = PANIC_HOOK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let hook = HookGuard::install();

    let mut master = StdRng::seed_from_u64(seed);
    let mut result = RunResult::Pass { cases };
    for case in 0..cases {
        let case_seed: u64 = master.random();
        let mut rng = StdRng::seed_from_u64(case_seed);
        let value = gen.draw(&mut rng);
        if let Err(message) = invoke(&property, &value) {
            result = shrink_failure(gen, &property, value, message, case);
            break;
        }
    }

    drop(hook);
    drop(lock);
    result
}

/// Bounded local search for a smaller failing sample.
///
/// Each round asks the generator for smaller candidates of the current
/// counterexample and keeps the first that still fails; the search stops
/// when no candidate fails or the attempt budget runs out. A final re-run
/// of the minimal sample captures its notes and panic message.
fn shrink_failure<G, F>(
    gen: &G,
    property: &F,
    initial: G::Value,
    initial_message: String,
    case: usize,
) -> RunResult
where
    G: Generator,
    F: Fn(&G::Value),
{
    let mut current = initial;
    let mut attempts = 0usize;
    let mut shrink_steps = 0usize;

    'search: loop {
        for candidate in gen.shrink(&current) {
            if attempts >= MAX_SHRINK_ATTEMPTS {
                break 'search;
            }
            attempts += 1;
            if invoke(property, &candidate).is_err() {
                current = candidate;
                shrink_steps += 1;
                continue 'search;
            }
        }
        break;
    }

    // Re-run the minimal sample so the reported notes belong to it. A
    // deterministic property fails again here; if it does not, keep the
    // original message rather than lose the failure.
    let message = match invoke(property, &current) {
        Err(message) => message,
        Ok(()) => initial_message,
    };
    let notes = notes::take();

    RunResult::Fail {
        counterexample: format!("{current:?}"),
        message,
        notes,
        case,
        shrink_steps,
    }
}
