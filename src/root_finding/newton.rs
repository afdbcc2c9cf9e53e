//! Newton-Raphson method

use log::trace;
use thiserror::Error;

use super::algorithms::{Algorithm, OpenFamily};
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::{RootFindingError, ToleranceError};
use super::evaluate::Evaluator;
use super::report::{MethodResult, TerminationReason};
use super::tracker::ConvergenceTracker;

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::Newton);


#[derive(Debug, Error)]
pub enum NewtonError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },
}


/// Newton configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with tolerance, optional `max_iter` and
///              precision policy.
///
/// # Defaults
/// - If `common.max_iter` is `None`, [`newton`] resolves it using
///   [`Algorithm::default_max_iter`] for [`OpenFamily::Newton`].
#[derive(Debug, Copy, Clone)]
pub struct NewtonCfg {
    common: CommonCfg,
}
impl NewtonCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(NewtonCfg);


/// Finds a root of a function using
/// [Newton's method](https://en.wikipedia.org/wiki/Newton%27s_method).
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `dfunc` : its analytic derivative
/// - `x0`    : initial guess (finite)
/// - `cfg`   : [`NewtonCfg`]
///
/// # Behavior
/// - `x = P(x0)` and `f(x)` are computed once before the loop.
/// - Each pass: if `df(x) == 0` the loop stops with
///   [`TerminationReason::SingularDerivative`] at the current `x`.
///   Otherwise `x_next = P(x - f(x) / df(x))`, error `|f(x_next)|` is
///   recorded and `x = x_next`. Stops once the error is `< tolerance`.
///
/// # Returns
/// [`MethodResult`] whose `final_estimate` is the last iterate (or the
/// coerced seed if the derivative vanished there). Possible terminations:
/// - [`TerminationReason::ToleranceReached`]
/// - [`TerminationReason::IterationLimit`]
/// - [`TerminationReason::SingularDerivative`]
/// - [`TerminationReason::NonFiniteIterate`] : the step overflowed, e.g. a
///   tiny or infinite derivative
///
/// # Errors
/// - [`NewtonError::InvalidGuess`]           : `x0` non-finite, before or after coercion
/// - [`RootFindingError::DomainError`]       : `func` or `dfunc` returned NaN
/// - [`RootFindingError::InvalidMaxIter`]    : `max_iter = 0`
pub fn newton<F, D>(
    func: F,
    dfunc: D,
    x0: f64,
    cfg: NewtonCfg,
) -> Result<MethodResult, NewtonError>
where
    F: FnMut(f64) -> f64,
    D: FnMut(f64) -> f64,
{
    let tolerance = cfg.common.tolerance();
    let precision = cfg.common.precision();
    let num_iter  = cfg.common.resolve_max_iter(ALGORITHM)?;

    let mut x = precision.apply(x0);
    if !x.is_finite() {
        return Err(NewtonError::InvalidGuess { x0 });
    }

    let mut f  = Evaluator::new(func);
    let mut df = Evaluator::new(dfunc);
    let mut fx = f.eval(x)?;

    let mut tracker = ConvergenceTracker::with_capacity(num_iter);

    for iter in 1..=num_iter {
        let dfx = df.eval(x)?;
        if dfx == 0.0 {
            return Ok(tracker.finish(
                x, f.evaluations() + df.evaluations(),
                TerminationReason::SingularDerivative, ALGORITHM,
            ));
        }

        let x_next = precision.apply(x - fx / dfx);
        if !x_next.is_finite() {
            tracker.record_non_finite(x_next);
            return Ok(tracker.finish(
                x_next, f.evaluations() + df.evaluations(),
                TerminationReason::NonFiniteIterate, ALGORITHM,
            ));
        }

        let f_next   = f.eval(x_next)?;
        let residual = f_next.abs();
        tracker.record_step(x_next, residual);
        trace!("newton iter={iter} x={x:e} f'(x)={dfx:e} x_next={x_next:e} |f|={residual:e}");

        x  = x_next;
        fx = f_next;

        if residual < tolerance {
            return Ok(tracker.finish(
                x, f.evaluations() + df.evaluations(),
                TerminationReason::ToleranceReached, ALGORITHM,
            ));
        }
    }

    Ok(tracker.finish(
        x, f.evaluations() + df.evaluations(),
        TerminationReason::IterationLimit, ALGORITHM,
    ))
}
