//! Per-invocation diagnostic notes.
//!
//! A property body may call [`note`] to record intermediate values. The
//! buffer is cleared at the start of every property invocation, including
//! every shrink re-run, and is discarded silently when the invocation
//! passes. Only the notes from the minimal failing invocation reach the
//! final report.

use std::cell::RefCell;

thread_local! {
    static NOTES: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Record a diagnostic message for the current property invocation.
///
/// Surfaced in the failure report only if this invocation turns out to be
/// the minimal counterexample; otherwise dropped.
pub fn note(message: impl Into<String>) {
    NOTES.with(|buf| buf.borrow_mut().push(message.into()));
}

/// Clear the buffer. Called by the executor before each invocation.
pub(crate) fn clear() {
    NOTES.with(|buf| buf.borrow_mut().clear());
}

/// Take the notes recorded since the last [`clear`], leaving the buffer
/// empty.
pub(crate) fn take() -> Vec<String> {
    NOTES.with(|buf| std::mem::take(&mut *buf.borrow_mut()))
}
