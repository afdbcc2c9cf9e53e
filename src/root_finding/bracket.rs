//! Bracket set-up shared by bisection, false position and Illinois.

use super::errors::{BracketError, RootFindingError};
use super::evaluate::Evaluator;
use super::precision::PrecisionPolicy;
use super::signs::strictly_opposite;


/// Coerced endpoints and their function values.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Endpoints {
    pub low:    f64,
    pub f_low:  f64,
    pub high:   f64,
    pub f_high: f64,
}

/// Checks the bounds, applies `precision` to them and evaluates `f` at both.
///
/// # Errors
/// - [`BracketError::InvalidBounds`]  : non-finite bounds, or `low >= high`
///   once coerced (truncation can collapse a narrow bracket)
/// - [`BracketError::InvalidBracket`] : no strict sign change, only when
///   `validate` is set
/// - [`RootFindingError::DomainError`] : `f` undefined at an endpoint
pub(crate) fn init_bracket<F, E>(
    eval: &mut Evaluator<F>,
    low: f64,
    high: f64,
    precision: PrecisionPolicy,
    validate: bool,
) -> Result<Endpoints, E>
where
    F: FnMut(f64) -> f64,
    E: From<RootFindingError> + From<BracketError>,
{
    if !(low.is_finite() && high.is_finite()) {
        return Err(BracketError::InvalidBounds { low, high }.into());
    }

    let low  = precision.apply(low);
    let high = precision.apply(high);
    if !(low.is_finite() && high.is_finite()) || low >= high {
        return Err(BracketError::InvalidBounds { low, high }.into());
    }

    let f_low  = eval.eval(low)?;
    let f_high = eval.eval(high)?;
    if validate && !strictly_opposite(f_low, f_high) {
        return Err(BracketError::InvalidBracket { low, high, f_low, f_high }.into());
    }

    Ok(Endpoints { low, f_low, high, f_high })
}
