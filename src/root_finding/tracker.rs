//! Append-only record of per-iteration errors.
//!
//! Each engine owns one [`ConvergenceTracker`] for the duration of a call,
//! feeds it one entry per loop pass and converts it into the
//! [`MethodResult`] it returns. The engine never reads the trace back.

use log::debug;

use super::algorithms::Algorithm;
use super::report::{MethodResult, TerminationReason};


#[derive(Debug, Clone, Default)]
pub struct ConvergenceTracker {
    residuals: Vec<f64>,
    iterates:  Vec<f64>,
}

impl ConvergenceTracker {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn with_capacity(n: usize) -> Self {
        Self {
            residuals: Vec::with_capacity(n),
            iterates:  Vec::with_capacity(n),
        }
    }

    /// Appends one error magnitude.
    ///
    /// Entries recorded this way have no iterate attached; use
    /// [`ConvergenceTracker::record_step`] to keep both sequences aligned.
    pub fn record(&mut self, residual: f64) {
        self.residuals.push(residual);
    }

    /// Appends an iterate together with its error magnitude.
    pub fn record_step(&mut self, x: f64, residual: f64) {
        self.iterates.push(x);
        self.record(residual);
    }

    /// Records an iterate that overflowed or became NaN.
    ///
    /// The user function is not evaluated there; the error is `+inf`.
    pub fn record_non_finite(&mut self, x: f64) {
        self.record_step(x, f64::INFINITY);
    }

    pub fn trace(&self)    -> &[f64] { &self.residuals }
    pub fn iterates(&self) -> &[f64] { &self.iterates }
    pub fn count(&self)    -> usize  { self.residuals.len() }

    pub fn last_residual(&self) -> Option<f64> {
        self.residuals.last().copied()
    }

    /// Consumes the tracker into the report returned to the caller.
    pub fn finish(
        self,
        final_estimate: f64,
        evaluations: usize,
        termination: TerminationReason,
        algorithm: Algorithm,
    ) -> MethodResult {
        debug!(
            "{algorithm}: {termination:?} after {} iterations ({evaluations} evals), x={final_estimate:e}, last error={:?}",
            self.count(),
            self.last_residual(),
        );

        MethodResult {
            final_estimate,
            iterations_used : self.count(),
            error_trace     : self.residuals,
            iterates        : self.iterates,
            evaluations,
            termination,
            algorithm_name  : algorithm.algorithm_name(),
        }
    }
}
