use log::trace;
use thiserror::Error;

use super::algorithms::{Algorithm, BracketFamily};
use super::bracket::{init_bracket, Endpoints};
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::{BracketError, RootFindingError, ToleranceError};
use super::evaluate::Evaluator;
use super::report::{MethodResult, TerminationReason};
use super::signs::strictly_opposite;
use super::tracker::ConvergenceTracker;

const ALGORITHM: Algorithm = Algorithm::Bracket(BracketFamily::Bisection);


#[derive(Debug, Error)]
pub enum BisectionError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error(transparent)]
    Bracket(#[from] BracketError),
}


/// Bisection configuration
///
/// # Fields
/// - `common`           : [`CommonCfg`] with tolerance, optional `max_iter`
///                        and precision policy.
/// - `validate_bracket` : reject brackets without a strict sign change
///                        (default `true`).
///
/// # Construction
/// - Use [`BisectionCfg::new`] then optional setters.
///
/// # Defaults
/// - tolerance = 1e-6, precision = full
/// - If `max_iter` is `None`, [`Algorithm::default_max_iter`] is used.
#[derive(Debug, Copy, Clone)]
pub struct BisectionCfg {
    common: CommonCfg,
    validate_bracket: bool,
}
impl BisectionCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
            validate_bracket: true,
        }
    }

    /// Turns the sign-change precondition on or off.
    ///
    /// With validation off an invalid bracket is not rejected; the loop
    /// still runs to `max_iter` and returns a non-convergent result.
    #[must_use]
    pub fn set_validate_bracket(mut self, v: bool) -> Self {
        self.validate_bracket = v;
        self
    }

    #[inline] #[must_use]
    pub fn validate_bracket(&self) -> bool { self.validate_bracket }
}
impl_common_cfg!(BisectionCfg);


/// Midpoint of `[low, high]`, before precision coercion.
///
/// Halves each bound first so brackets near `f64::MAX` cannot overflow.
#[inline]
fn midpoint(low: f64, high: f64) -> f64 {
    0.5 * low + 0.5 * high
}


/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// # Arguments
/// - `func` : function whose root is sought
/// - `low`  : lower bound, finite and `< high`
/// - `high` : upper bound, finite and `> low`
/// - `cfg`  : [`BisectionCfg`]
///
/// # Behavior
/// - Each pass: `m = P((low + high) / 2)`, error `|f(m)|` is recorded,
///   and the loop stops once it is `< tolerance`.
/// - Otherwise, if `f(low)` and `f(m)` have strictly opposite signs then
///   `high = m`, else `low = m`.
/// - Tie-break: `f(low) * f(m) == 0` takes the `else` branch, so `low`
///   moves to `m`.
/// - `P` (the precision policy) is also applied to both bounds up front.
///
/// # Returns
/// [`MethodResult`] whose `final_estimate` is the last midpoint, with
/// [`TerminationReason::ToleranceReached`] or
/// [`TerminationReason::IterationLimit`].
///
/// # Errors
/// - [`BracketError::InvalidBounds`]         : non-finite or unordered bounds
/// - [`BracketError::InvalidBracket`]        : no strict sign change (when validating)
/// - [`RootFindingError::DomainError`]       : `func` returned NaN
/// - [`RootFindingError::InvalidMaxIter`]    : `max_iter = 0`
///
/// # Notes
/// - Truncated precision can snap the midpoint onto a bound; the interval
///   then stops shrinking and the loop runs to `max_iter`.
pub fn bisection<F>(
    func: F,
    low: f64,
    high: f64,
    cfg: BisectionCfg,
) -> Result<MethodResult, BisectionError>
where F: FnMut(f64) -> f64 {

    let tolerance = cfg.common.tolerance();
    let precision = cfg.common.precision();
    let num_iter  = cfg.common.resolve_max_iter(ALGORITHM)?;

    let mut eval = Evaluator::new(func);
    let Endpoints { mut low, mut f_low, mut high, .. } =
        init_bracket::<_, BisectionError>(&mut eval, low, high, precision, cfg.validate_bracket)?;

    let mut tracker = ConvergenceTracker::with_capacity(num_iter);
    let mut mid     = low;    // gets overwritten

    for iter in 1..=num_iter {
        // finite: the bounds are finite and already coerced
        mid = precision.apply(midpoint(low, high));

        let f_mid    = eval.eval(mid)?;
        let residual = f_mid.abs();
        tracker.record_step(mid, residual);
        trace!("bisection iter={iter} low={low:e} high={high:e} m={mid:e} |f(m)|={residual:e}");

        if residual < tolerance {
            return Ok(tracker.finish(
                mid, eval.evaluations(), TerminationReason::ToleranceReached, ALGORITHM
            ));
        }

        // shrink interval
        if strictly_opposite(f_low, f_mid) {
            high = mid;
        } else {
            low   = mid;
            f_low = f_mid;
        }
    }

    Ok(tracker.finish(mid, eval.evaluations(), TerminationReason::IterationLimit, ALGORITHM))
}
