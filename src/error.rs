//! Error types for Holdfast
//!
//! Uses `thiserror` for library errors. All variants are configuration
//! errors: they surface when a generator spec is constructed, before any
//! sampling happens. A falsified property is not an error; it is the
//! `Fail` variant of a run result.

use thiserror::Error;

/// Result type alias for Holdfast operations
pub type HoldfastResult<T> = Result<T, HoldfastError>;

/// Main error type for Holdfast operations
#[derive(Error, Debug)]
pub enum HoldfastError {
    /// Size bounds are inverted (min above max)
    #[error("invalid size bounds: min_size {min} > max_size {max}")]
    InvalidBounds { min: usize, max: usize },

    /// A text generator was given nothing to draw characters from
    #[error("text generator requires a non-empty alphabet")]
    EmptyAlphabet,

    /// Integer range is inverted (low above high)
    #[error("invalid integer range: low {low} > high {high}")]
    InvalidRange { low: i64, high: i64 },
}
