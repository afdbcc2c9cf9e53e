//! Post-hoc classification of a finished run.
//!
//! Engines never decide convergence for the caller: they stop on their own
//! test, on the iteration cap or on a numeric breakdown. [`classify`] then
//! looks at the final estimate and a recorded sequence and produces a
//! [`Diagnosis`]:
//!
//! ┌ status                  : converged iff `|f(x)| < tolerance` and `x` is finite
//! ├ rounding_error          : `|s[n-1] - s[n-2]|` over the sequence, NaN if `n < 2`
//! ├ relative_rounding_error : rounding / `|x|`, NaN if `x == 0`
//! └ truncation_error        : `|f(x)|`
//!
//! The sequence is the error trace ([`diagnose`]) or the iterate sequence
//! ([`Diagnosis::from_iterates`]). The two give different rounding
//! estimates for the same run.

use super::report::MethodResult;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConvergenceStatus {
    Converged,
    Diverged,
}


/// Summary of one run, computed after the fact.
///
/// Non-applicable quantities are `NaN`, never an error.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnosis {
    pub status                  : ConvergenceStatus,
    pub final_estimate          : f64,
    pub iterations              : usize,
    pub rounding_error          : f64,
    pub relative_rounding_error : f64,
    pub truncation_error        : f64,
}

impl Diagnosis {
    pub fn is_converged(&self) -> bool {
        self.status == ConvergenceStatus::Converged
    }

    /// Like [`diagnose`], but the rounding estimate is the distance between
    /// the last two iterates instead of the last two trace entries.
    pub fn from_iterates<F>(func: F, result: &MethodResult, tolerance: f64) -> Self
    where F: FnMut(f64) -> f64 {
        let mut diag = classify(func, result.final_estimate, &result.iterates, tolerance);
        diag.iterations = result.iterations_used;
        diag
    }
}


/// Classifies `final_estimate` against `tolerance` and estimates its errors
/// from `sequence`.
///
/// `iterations` is `sequence.len()`. `func` is called at most once and is
/// not called at all for a non-finite estimate; the truncation error is
/// then `NaN` and the status [`ConvergenceStatus::Diverged`].
pub fn classify<F>(mut func: F, final_estimate: f64, sequence: &[f64], tolerance: f64) -> Diagnosis
where F: FnMut(f64) -> f64 {

    let truncation_error = if final_estimate.is_finite() {
        func(final_estimate).abs()
    } else {
        f64::NAN
    };

    // NaN compares false, which covers the non-finite case too
    let status = if final_estimate.is_finite() && truncation_error < tolerance {
        ConvergenceStatus::Converged
    } else {
        ConvergenceStatus::Diverged
    };

    let rounding_error = match sequence {
        [.., prev, last] => (last - prev).abs(),
        _                => f64::NAN,
    };

    let relative_rounding_error = if final_estimate.abs() > 0.0 {
        rounding_error / final_estimate.abs()
    } else {
        f64::NAN
    };

    Diagnosis {
        status,
        final_estimate,
        iterations: sequence.len(),
        rounding_error,
        relative_rounding_error,
        truncation_error,
    }
}


/// [`classify`] over a [`MethodResult`] and its error trace.
pub fn diagnose<F>(func: F, result: &MethodResult, tolerance: f64) -> Diagnosis
where F: FnMut(f64) -> f64 {
    classify(func, result.final_estimate, &result.error_trace, tolerance)
}
