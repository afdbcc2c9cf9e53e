//! Root-finding error types.
//!
//! ┌ [`RootFindingError`] : common runtime errors
//! │   ├ function undefined at a requested point (NaN evaluation)
//! │   └ invalid global parameters (e.g. max_iter)
//! │
//! ├ [`ToleranceError`]   : tolerance-related errors
//! │   └ invalid input tolerance
//! │
//! └ [`BracketError`]     : bracket precondition errors
//!     ├ non-finite or unordered bounds
//!     └ no strict sign change across the bracket
//!
//! Numeric singularities met *during* iteration (vanishing derivative,
//! flat secant, overflowing iterate) are not errors. They end the loop
//! early and are reported through [`TerminationReason`].
//!
//! [`TerminationReason`]: super::report::TerminationReason

use thiserror::Error;


/// Root-finding runtime errors.
///
/// ┌ User function undefined at `x`
/// └ Invalid global configuration (e.g. max_iter < 1)
#[derive(Debug, Error)]
pub enum RootFindingError {
    #[error("function undefined at x={x}: evaluation returned NaN")]
    DomainError { x: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },
}


/// Tolerance configuration errors.
#[derive(Debug, Error)]
pub enum ToleranceError {
    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },
}


/// Bracket precondition errors shared by the bracketing methods.
///
/// ┌ Bounds non-finite, or `low >= high` after precision coercion
/// └ `f(low)` and `f(high)` without strictly opposite signs
///   (skipped when bracket validation is disabled)
#[derive(Debug, Error)]
pub enum BracketError {
    #[error("invalid bounds: low and high must be finite with low < high. got [{low}, {high}]")]
    InvalidBounds { low: f64, high: f64 },

    #[error(
        "invalid bracket [{low}, {high}]: f(low)={f_low} and f(high)={f_high} \
         must have strictly opposite signs"
    )]
    InvalidBracket { low: f64, high: f64, f_low: f64, f_high: f64 },
}
