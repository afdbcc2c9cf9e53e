//! Precision modes applied to every freshly computed iterate.
//!
//! [`PrecisionPolicy`]
//! ├ `Full`                : identity, plain `f64`
//! ├ `Narrowed`            : round-trip through `f32` (IEEE-754 nearest-even)
//! └ `Truncated { places }`: chop toward zero at a fixed number of decimals
//!
//! The policy only ever touches iterates (midpoints, interpolation points,
//! Newton/secant/fixed-point updates) and the initial bracket or seeds.
//! Values returned by the user function are never coerced.


/// How a raw `f64` result is coerced after each computed step.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrecisionPolicy {
    #[default]
    Full,
    Narrowed,
    Truncated { places: u32 },
}

impl PrecisionPolicy {
    /// Shorthand for [`PrecisionPolicy::Truncated`].
    #[must_use]
    pub const fn truncated(places: u32) -> Self {
        PrecisionPolicy::Truncated { places }
    }

    /// Coerces `x` according to the policy. Total and pure.
    #[inline]
    #[must_use]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            PrecisionPolicy::Full                => x,
            PrecisionPolicy::Narrowed            => narrow(x),
            PrecisionPolicy::Truncated { places } => truncate(x, places),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            PrecisionPolicy::Full             => "full",
            PrecisionPolicy::Narrowed         => "narrowed",
            PrecisionPolicy::Truncated { .. } => "truncated",
        }
    }
}
impl std::fmt::Display for PrecisionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrecisionPolicy::Truncated { places } => write!(f, "truncated({places})"),
            other                                 => write!(f, "{}", other.label()),
        }
    }
}


#[inline]
fn narrow(x: f64) -> f64 {
    (x as f32) as f64
}

/// `trunc(x * 10^places) / 10^places`
///
/// - non-finite `x` passes through
/// - if `x * 10^places` is not finite, `x` is returned unchanged
/// - `x` already equal to a grid value `k / 10^places` is returned as is,
///   even when `x * 10^places` rounds to just below `k`
/// - the result never has a larger magnitude than `x`
#[inline]
fn truncate(x: f64, places: u32) -> f64 {
    if !x.is_finite() {
        return x;
    }

    let scale  = 10f64.powi(i32::try_from(places).unwrap_or(i32::MAX));
    let scaled = x * scale;
    if !scaled.is_finite() {
        return x;
    }

    let on_grid = scaled.round() / scale;
    if on_grid == x {
        return on_grid;
    }

    // x * scale may have rounded up onto the next integer
    let mut chopped = scaled.trunc();
    if (chopped / scale).abs() > x.abs() {
        chopped -= chopped.signum();
    }

    chopped / scale
}
