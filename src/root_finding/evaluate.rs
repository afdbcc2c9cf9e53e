//! Counting wrapper around user-supplied functions.
//!
//! Every engine evaluates `f` (and `df` or `g`) through an [`Evaluator`],
//! which counts calls for the report and turns a `NaN` return into
//! [`RootFindingError::DomainError`]. Infinite values are passed through;
//! they are legitimate function values and the engines decide what to do
//! with them.

use super::errors::RootFindingError;


pub(crate) struct Evaluator<F> {
    func:  F,
    evals: usize,
}

impl<F> Evaluator<F>
where F: FnMut(f64) -> f64 {
    pub(crate) fn new(func: F) -> Self {
        Self { func, evals: 0 }
    }

    #[inline]
    pub(crate) fn eval(&mut self, x: f64) -> Result<f64, RootFindingError> {
        let fx = { self.evals += 1; (self.func)(x) };
        if fx.is_nan() {
            return Err(RootFindingError::DomainError { x });
        }

        Ok(fx)
    }

    #[inline]
    pub(crate) fn evaluations(&self) -> usize {
        self.evals
    }
}
