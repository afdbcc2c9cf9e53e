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


#[derive(Debug, Error)]
pub enum RegulaFalsiError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error(transparent)]
    Bracket(#[from] BracketError),
}


/// Which false-position variant to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegulaFalsiVariant {
    // classic regula falsi: an endpoint can freeze on convex/concave f
    Pure,

    // illinois: every pass halves the function value kept for the
    // endpoint that was *not* replaced
    #[default]
    Illinois,
}

impl RegulaFalsiVariant {
    pub const fn algorithm(self) -> Algorithm {
        match self {
            RegulaFalsiVariant::Pure     => Algorithm::Bracket(BracketFamily::FalsePosition),
            RegulaFalsiVariant::Illinois => Algorithm::Bracket(BracketFamily::Illinois),
        }
    }
}


/// RegulaFalsi configuration
///
/// # Fields
/// - `common`           : [`CommonCfg`] with tolerance, optional `max_iter`
///                        and precision policy.
/// - `variant`          : [`RegulaFalsiVariant`] (default Illinois), used by
///                        [`regula_falsi`]. [`false_position`] and
///                        [`illinois`] pick their own variant.
/// - `validate_bracket` : reject brackets without a strict sign change
///                        (default `true`).
///
/// # Defaults
/// - If `max_iter` is `None`, [`Algorithm::default_max_iter`] of the
///   variant's algorithm is used.
#[derive(Debug, Copy, Clone)]
pub struct RegulaFalsiCfg {
    common: CommonCfg,
    variant: RegulaFalsiVariant,
    validate_bracket: bool,
}
impl RegulaFalsiCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
            variant: RegulaFalsiVariant::default(),
            validate_bracket: true,
        }
    }

    #[must_use]
    pub fn set_variant(mut self, v: RegulaFalsiVariant) -> Self {
        self.variant = v;
        self
    }

    /// Turns the sign-change precondition on or off.
    #[must_use]
    pub fn set_validate_bracket(mut self, v: bool) -> Self {
        self.validate_bracket = v;
        self
    }

    #[inline] #[must_use] pub fn variant(&self) -> RegulaFalsiVariant { self.variant }
    #[inline] #[must_use] pub fn validate_bracket(&self) -> bool { self.validate_bracket }
}
impl_common_cfg!(RegulaFalsiCfg);


/// x-intercept of the line through `(a, fa)` and `(b, fb)`.
///
/// Returns `None` when `fb == fa` (flat secant); the caller stops with
/// [`TerminationReason::StagnantSecant`].
#[inline]
fn secant_x_intercept((a, fa): (f64, f64), (b, fb): (f64, f64)) -> Option<f64> {
    let denom = fb - fa;
    if denom == 0.0 {
        return None;
    }

    Some((a * fb - b * fa) / denom)
}


/// Finds a root using the
/// [false position method](https://en.wikipedia.org/wiki/Regula_falsi)
/// without endpoint damping.
///
/// Shorthand for [`regula_falsi`] with [`RegulaFalsiVariant::Pure`],
/// whatever variant `cfg` carries.
pub fn false_position<F>(
    func: F,
    low: f64,
    high: f64,
    cfg: RegulaFalsiCfg,
) -> Result<MethodResult, RegulaFalsiError>
where F: FnMut(f64) -> f64 {
    regula_falsi(func, low, high, cfg.set_variant(RegulaFalsiVariant::Pure))
}

/// Finds a root using the Illinois variant of false position.
///
/// Shorthand for [`regula_falsi`] with [`RegulaFalsiVariant::Illinois`],
/// whatever variant `cfg` carries.
pub fn illinois<F>(
    func: F,
    low: f64,
    high: f64,
    cfg: RegulaFalsiCfg,
) -> Result<MethodResult, RegulaFalsiError>
where F: FnMut(f64) -> f64 {
    regula_falsi(func, low, high, cfg.set_variant(RegulaFalsiVariant::Illinois))
}


/// Finds a root of a function using the ancient
/// [regula falsi method](https://en.wikipedia.org/wiki/Regula_falsi).
///
/// # Arguments
/// - `func` : function whose root is sought
/// - `low`  : lower bound, finite and `< high`
/// - `high` : upper bound, finite and `> low`
/// - `cfg`  : [`RegulaFalsiCfg`]
///
/// # Behavior
/// - Each pass: `m = P((a * fb - b * fa) / (fb - fa))`, error `|f(m)|` is
///   recorded and the loop stops once it is `< tolerance`.
/// - If `fa` and `f(m)` have strictly opposite signs, `(b, fb) <- (m, f(m))`;
///   otherwise `(a, fa) <- (m, f(m))`. A zero product goes to the second
///   branch, same tie-break as bisection.
/// - Illinois additionally halves the retained endpoint's function value
///   (`fa` after replacing `b`, `fb` after replacing `a`) on every pass.
///
/// # Returns
/// [`MethodResult`] whose `final_estimate` is the last interpolation point,
/// or the lower bound if the first pass already broke down. Possible
/// terminations:
/// - [`TerminationReason::ToleranceReached`]
/// - [`TerminationReason::IterationLimit`]
/// - [`TerminationReason::StagnantSecant`]   : `fb == fa`, no division made
/// - [`TerminationReason::NonFiniteIterate`] : the interpolation overflowed
///
/// # Errors
/// - [`BracketError::InvalidBounds`]         : non-finite or unordered bounds
/// - [`BracketError::InvalidBracket`]        : no strict sign change (when validating)
/// - [`RootFindingError::DomainError`]       : `func` returned NaN
/// - [`RootFindingError::InvalidMaxIter`]    : `max_iter = 0`
pub fn regula_falsi<F>(
    func: F,
    low: f64,
    high: f64,
    cfg: RegulaFalsiCfg,
) -> Result<MethodResult, RegulaFalsiError>
where F: FnMut(f64) -> f64 {

    let variant   = cfg.variant();
    let algorithm = variant.algorithm();
    let tolerance = cfg.common.tolerance();
    let precision = cfg.common.precision();
    let num_iter  = cfg.common.resolve_max_iter(algorithm)?;

    let mut eval = Evaluator::new(func);
    let Endpoints { low: mut a, f_low: mut fa, high: mut b, f_high: mut fb } =
        init_bracket::<_, RegulaFalsiError>(&mut eval, low, high, precision, cfg.validate_bracket)?;

    let mut tracker  = ConvergenceTracker::with_capacity(num_iter);
    let mut estimate = a;    // gets overwritten

    for iter in 1..=num_iter {
        let Some(raw) = secant_x_intercept((a, fa), (b, fb)) else {
            return Ok(tracker.finish(
                estimate, eval.evaluations(), TerminationReason::StagnantSecant, algorithm
            ));
        };

        estimate = precision.apply(raw);
        if !estimate.is_finite() {
            tracker.record_non_finite(estimate);
            return Ok(tracker.finish(
                estimate, eval.evaluations(), TerminationReason::NonFiniteIterate, algorithm
            ));
        }

        let f_est    = eval.eval(estimate)?;
        let residual = f_est.abs();
        tracker.record_step(estimate, residual);
        trace!("{algorithm} iter={iter} a={a:e} b={b:e} m={estimate:e} |f(m)|={residual:e}");

        if residual < tolerance {
            return Ok(tracker.finish(
                estimate, eval.evaluations(), TerminationReason::ToleranceReached, algorithm
            ));
        }

        // shrink interval, damping the retained endpoint for illinois
        if strictly_opposite(fa, f_est) {
            b  = estimate;
            fb = f_est;
            if variant == RegulaFalsiVariant::Illinois {
                fa *= 0.5;
            }
        } else {
            a  = estimate;
            fa = f_est;
            if variant == RegulaFalsiVariant::Illinois {
                fb *= 0.5;
            }
        }
    }

    Ok(tracker.finish(estimate, eval.evaluations(), TerminationReason::IterationLimit, algorithm))
}
