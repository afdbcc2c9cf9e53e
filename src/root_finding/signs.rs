//! Sign utilities for the bracketing algorithms.
//! - `strictly_opposite` : `true` if both values are nonzero with opposite signs

/// Returns `true` if `x * y < 0`.
///
/// Decided on the signs directly so that a product underflowing to zero
/// cannot hide a sign change. A zero on either side is a tie and returns
/// `false`.
#[inline]
pub(crate) fn strictly_opposite(x: f64, y: f64) -> bool {
    (x < 0.0 && y > 0.0) || (x > 0.0 && y < 0.0)
}
