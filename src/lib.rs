//! Scalar root finding with selectable precision modes and
//! per-iteration convergence traces.
//!
//! See [`root_finding`] for the method engines and the diagnostics
//! layered on top of their results.

pub mod root_finding;
