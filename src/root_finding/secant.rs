use log::trace;
use thiserror::Error;

use super::algorithms::{Algorithm, OpenFamily};
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::{RootFindingError, ToleranceError};
use super::evaluate::Evaluator;
use super::report::{MethodResult, TerminationReason};
use super::tracker::ConvergenceTracker;

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::Secant);


#[derive(Debug, Error)]
pub enum SecantError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid initial guesses: x0={x0} and x1={x1} must be finite")]
    InvalidGuess { x0: f64, x1: f64 },
}


/// Secant configuration
///
/// # Fields
/// - `common` : [`CommonCfg`] with tolerance, optional `max_iter` and
///              precision policy.
///
/// # Construction
/// - Use [`SecantCfg::new`] then optional setters.
///
/// # Defaults
/// - If `common.max_iter` is `None`, [`secant`] resolves it using
///   [`Algorithm::default_max_iter`] for [`OpenFamily::Secant`].
#[derive(Debug, Copy, Clone)]
pub struct SecantCfg {
    common: CommonCfg,
}
impl SecantCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new()
        }
    }
}
impl_common_cfg!(SecantCfg);


/// Calculates the secant x-intercept for the line
/// connecting `(x0, f0)` and `(x1, f1)`
///
/// # Returns
/// - `Some(x2)` for a non-flat secant
/// - `None` if `f1 == f0`
#[inline]
fn secant_step((x0, f0): (f64, f64), (x1, f1): (f64, f64)) -> Option<f64> {
    if f1 == f0 {
        return None;
    }

    Some(x1 - f1 * (x1 - x0) / (f1 - f0))
}


/// Finds a root of a function using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func` : function whose root is sought
/// - `x0`   : first seed (finite)
/// - `x1`   : second seed (finite)
/// - `cfg`  : [`SecantCfg`]
///
/// # Behavior
/// - Both seeds are coerced by the precision policy and evaluated once.
/// - Each pass: if `f(x1) == f(x0)` the loop stops with
///   [`TerminationReason::StagnantSecant`] at `x1`. Otherwise
///   `x2 = P(x1 - f(x1) * (x1 - x0) / (f(x1) - f(x0)))`, error `|f(x2)|` is
///   recorded and the pair shifts to `(x1, x2)`.
/// - Equal seeds give a flat secant on the first pass, so the result has
///   zero iterations rather than an error.
///
/// # Returns
/// [`MethodResult`] with `final_estimate` the newest point. Possible
/// terminations:
/// - [`TerminationReason::ToleranceReached`]
/// - [`TerminationReason::IterationLimit`]
/// - [`TerminationReason::StagnantSecant`]
/// - [`TerminationReason::NonFiniteIterate`]
///
/// # Errors
/// - [`SecantError::InvalidGuess`]           : a seed is non-finite, before or after coercion
/// - [`RootFindingError::DomainError`]       : `func` returned NaN
/// - [`RootFindingError::InvalidMaxIter`]    : `max_iter = 0`
pub fn secant<F>(
    func: F,
    x0: f64,
    x1: f64,
    cfg: SecantCfg,
) -> Result<MethodResult, SecantError>
where F: FnMut(f64) -> f64 {

    let tolerance = cfg.common.tolerance();
    let precision = cfg.common.precision();
    let num_iter  = cfg.common.resolve_max_iter(ALGORITHM)?;

    let (seed0, seed1) = (x0, x1);
    let mut x0 = precision.apply(seed0);
    let mut x1 = precision.apply(seed1);
    if !(x0.is_finite() && x1.is_finite()) {
        return Err(SecantError::InvalidGuess { x0: seed0, x1: seed1 });
    }

    let mut eval = Evaluator::new(func);
    let mut f0   = eval.eval(x0)?;
    let mut f1   = eval.eval(x1)?;

    let mut tracker = ConvergenceTracker::with_capacity(num_iter);

    for iter in 1..=num_iter {
        let Some(raw) = secant_step((x0, f0), (x1, f1)) else {
            return Ok(tracker.finish(
                x1, eval.evaluations(), TerminationReason::StagnantSecant, ALGORITHM
            ));
        };

        let x2 = precision.apply(raw);
        if !x2.is_finite() {
            tracker.record_non_finite(x2);
            return Ok(tracker.finish(
                x2, eval.evaluations(), TerminationReason::NonFiniteIterate, ALGORITHM
            ));
        }

        let f2       = eval.eval(x2)?;
        let residual = f2.abs();
        tracker.record_step(x2, residual);
        trace!("secant iter={iter} x0={x0:e} x1={x1:e} x2={x2:e} |f(x2)|={residual:e}");

        // shift
        (x0, f0) = (x1, f1);
        (x1, f1) = (x2, f2);

        if residual < tolerance {
            return Ok(tracker.finish(
                x1, eval.evaluations(), TerminationReason::ToleranceReached, ALGORITHM
            ));
        }
    }

    Ok(tracker.finish(x1, eval.evaluations(), TerminationReason::IterationLimit, ALGORITHM))
}
