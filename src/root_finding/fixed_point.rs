//! Fixed-point iteration `x <- g(x)`.
//!
//! The stopping test is chosen explicitly through [`StoppingCriterion`]:
//!
//! ┌ [`StoppingCriterion::Residual`] : `|f(x_next)| < tolerance`, needs `f`
//! └ [`StoppingCriterion::StepSize`] : `|x_next - x| < tolerance`, `g` only
//!
//! Whatever the criterion tests is what lands in the error trace, so the
//! trace of a step-size run holds step lengths, not residuals.

use log::trace;
use thiserror::Error;

use super::algorithms::{Algorithm, OpenFamily};
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::{RootFindingError, ToleranceError};
use super::evaluate::Evaluator;
use super::report::{MethodResult, TerminationReason};
use super::tracker::ConvergenceTracker;

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::FixedPoint);


#[derive(Debug, Error)]
pub enum FixedPointError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },

    #[error("residual stopping criterion needs the function f; got None")]
    MissingResidualFunction,
}


/// Quantity tested against the tolerance (and recorded) each pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StoppingCriterion {
    /// `|f(x_next)|`
    Residual,
    /// `|x_next - x|`
    #[default]
    StepSize,
}


/// FixedPoint configuration
///
/// # Fields
/// - `common`    : [`CommonCfg`] with tolerance, optional `max_iter` and
///                 precision policy.
/// - `criterion` : [`StoppingCriterion`], default `StepSize`.
#[derive(Debug, Copy, Clone)]
pub struct FixedPointCfg {
    common: CommonCfg,
    criterion: StoppingCriterion,
}
impl FixedPointCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
            criterion: StoppingCriterion::default(),
        }
    }

    #[must_use]
    pub fn set_criterion(mut self, v: StoppingCriterion) -> Self {
        self.criterion = v;
        self
    }

    #[inline] #[must_use]
    pub fn criterion(&self) -> StoppingCriterion { self.criterion }
}
impl_common_cfg!(FixedPointCfg);


/// Finds a fixed point of `iteration`, i.e. a root of `x - g(x)` or of
/// whichever `func` the caller pairs it with.
///
/// # Arguments
/// - `iteration` : the map `g`
/// - `func`      : `f` for the residual criterion; ignored by `StepSize`
/// - `x0`        : initial guess (finite)
/// - `cfg`       : [`FixedPointCfg`]
///
/// # Behavior
/// - Each pass: `x_next = P(g(x))`, the criterion's quantity is recorded and
///   `x = x_next`. Stops once that quantity is `< tolerance`.
/// - Divergence is not an error. If `x_next` overflows the loop stops with
///   [`TerminationReason::NonFiniteIterate`] and `x_next` becomes the final
///   estimate, for [`diagnostics`](super::diagnostics) to classify.
///
/// # Errors
/// - [`FixedPointError::MissingResidualFunction`] : `Residual` criterion, `func = None`
/// - [`FixedPointError::InvalidGuess`]            : `x0` non-finite, before or after coercion
/// - [`RootFindingError::DomainError`]            : `g` or `f` returned NaN
/// - [`RootFindingError::InvalidMaxIter`]         : `max_iter = 0`
pub fn fixed_point<G, F>(
    iteration: G,
    func: Option<F>,
    x0: f64,
    cfg: FixedPointCfg,
) -> Result<MethodResult, FixedPointError>
where
    G: FnMut(f64) -> f64,
    F: FnMut(f64) -> f64,
{
    let tolerance = cfg.common.tolerance();
    let precision = cfg.common.precision();
    let criterion = cfg.criterion();
    let num_iter  = cfg.common.resolve_max_iter(ALGORITHM)?;

    let mut residual_fn = match (criterion, func) {
        (StoppingCriterion::Residual, None)    => return Err(FixedPointError::MissingResidualFunction),
        (StoppingCriterion::Residual, Some(f)) => Some(Evaluator::new(f)),
        (StoppingCriterion::StepSize, _)       => None,
    };

    let mut x = precision.apply(x0);
    if !x.is_finite() {
        return Err(FixedPointError::InvalidGuess { x0 });
    }

    let mut g       = Evaluator::new(iteration);
    let mut tracker = ConvergenceTracker::with_capacity(num_iter);

    // g and f call counts combined
    let evaluations = |g: &Evaluator<G>, f: &Option<Evaluator<F>>| {
        g.evaluations() + f.as_ref().map_or(0, Evaluator::evaluations)
    };

    for iter in 1..=num_iter {
        let x_next = precision.apply(g.eval(x)?);
        if !x_next.is_finite() {
            tracker.record_non_finite(x_next);
            return Ok(tracker.finish(
                x_next, evaluations(&g, &residual_fn),
                TerminationReason::NonFiniteIterate, ALGORITHM,
            ));
        }

        let error = match residual_fn.as_mut() {
            Some(f) => f.eval(x_next)?.abs(),
            None    => (x_next - x).abs(),
        };
        tracker.record_step(x_next, error);
        trace!("fixed_point iter={iter} x={x:e} x_next={x_next:e} err={error:e} ({criterion:?})");

        x = x_next;

        if error < tolerance {
            return Ok(tracker.finish(
                x, evaluations(&g, &residual_fn),
                TerminationReason::ToleranceReached, ALGORITHM,
            ));
        }
    }

    Ok(tracker.finish(
        x, evaluations(&g, &residual_fn),
        TerminationReason::IterationLimit, ALGORITHM,
    ))
}
