//! Defines the [`MethodResult`] struct returned by all
//! root-finding algorithms.


/// Reasons a root-finding algorithm may terminate.
///
/// Only [`TerminationReason::ToleranceReached`] means the stopping test
/// passed. The others are normal returns; whether the final estimate is
/// usable is decided afterwards by [`diagnostics`](super::diagnostics).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerminationReason {
    /// per-iteration error fell below the tolerance
    ToleranceReached,
    /// `max_iter` passes without meeting the tolerance
    IterationLimit,
    /// newton: `df(x) == 0`
    SingularDerivative,
    /// secant-type step with equal function values on both points
    StagnantSecant,
    /// an iterate overflowed or became NaN
    NonFiniteIterate,
}

impl TerminationReason {
    /// `true` for the reasons that cut the loop short on a numeric
    /// singularity rather than on tolerance or the iteration cap.
    pub const fn is_breakdown(self) -> bool {
        matches!(
            self,
            TerminationReason::SingularDerivative
            | TerminationReason::StagnantSecant
            | TerminationReason::NonFiniteIterate
        )
    }
}


/// Final report returned by all root-finding algorithms.
///
/// [`MethodResult`]
/// - `final_estimate`  : last accepted or computed iterate
/// - `iterations_used` : loop passes that produced an iterate
/// - `error_trace`     : per-iteration error magnitudes, in iteration order
/// - `iterates`        : the iterates that produced each trace entry
/// - `evaluations`     : total user-function calls (f, df, g)
/// - `termination`     : why the solver stopped ([`TerminationReason`])
/// - `algorithm_name`  : algorithm name (e.g. `"illinois"`)
///
/// # Invariants
/// - `iterations_used == error_trace.len() == iterates.len()`
/// - `iterations_used <= max_iter`
/// - `iterations_used == 0` only when the first step broke down before
///   producing an iterate
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MethodResult {
    pub final_estimate  : f64,
    pub iterations_used : usize,
    pub error_trace     : Vec<f64>,
    pub iterates        : Vec<f64>,
    pub evaluations     : usize,
    pub termination     : TerminationReason,
    pub algorithm_name  : &'static str,
}

impl MethodResult {
    /// Last recorded error, `None` if no iteration completed.
    pub fn final_error(&self) -> Option<f64> {
        self.error_trace.last().copied()
    }

    /// `true` if the loop stopped because its own stopping test passed.
    pub fn reached_tolerance(&self) -> bool {
        self.termination == TerminationReason::ToleranceReached
    }
}
