//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! along with the shared [`DEFAULT_MAX_ITER`] and [`GLOBAL_MAX_ITER_FALLBACK`].


/// Iteration cap used when a config leaves `max_iter` unset.
pub const DEFAULT_MAX_ITER: usize = 100;

/// Upper bound on any resolved default cap.
///
/// Explicit `max_iter` values set by the caller are never clipped.
pub const GLOBAL_MAX_ITER_FALLBACK: usize = 500;


/// Root-finding algorithm variants.
/// - [`Algorithm::Bracket`] : methods that keep a sign-change interval
/// - [`Algorithm::Open`]    : methods driven by one or two seeds
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Bracket(BracketFamily),
    Open(OpenFamily),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BracketFamily {
    Bisection,
    FalsePosition,
    Illinois,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OpenFamily {
    Newton,
    Secant,
    FixedPoint,
}

impl Algorithm {
    /// All six methods, bracketing first.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bracket(BracketFamily::Bisection),
        Algorithm::Bracket(BracketFamily::FalsePosition),
        Algorithm::Bracket(BracketFamily::Illinois),
        Algorithm::Open(OpenFamily::Newton),
        Algorithm::Open(OpenFamily::Secant),
        Algorithm::Open(OpenFamily::FixedPoint),
    ];

    /// Default iteration count if `max_iter` is unset in config.
    ///
    /// # Notes
    /// - Plain false position gets twice the budget; a frozen endpoint
    ///   makes it linear with a poor constant on convex functions.
    /// - Result is clipped to [`GLOBAL_MAX_ITER_FALLBACK`].
    pub const fn default_max_iter(self) -> usize {
        let n = match self {
            Algorithm::Bracket(BracketFamily::FalsePosition) => 2 * DEFAULT_MAX_ITER,
            Algorithm::Bracket(_) | Algorithm::Open(_)       => DEFAULT_MAX_ITER,
        };
        if n > GLOBAL_MAX_ITER_FALLBACK { GLOBAL_MAX_ITER_FALLBACK } else { n }
    }

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection)     => "bisection",
            Algorithm::Bracket(BracketFamily::FalsePosition) => "false_position",
            Algorithm::Bracket(BracketFamily::Illinois)      => "illinois",
            Algorithm::Open(OpenFamily::Newton)              => "newton",
            Algorithm::Open(OpenFamily::Secant)              => "secant",
            Algorithm::Open(OpenFamily::FixedPoint)          => "fixed_point",
        }
    }

    pub const fn is_bracketing(self) -> bool {
        matches!(self, Algorithm::Bracket(_))
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
