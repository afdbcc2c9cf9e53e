//! Wall-clock timing for solver calls.
//!
//! Timing is kept outside the engines; wrap any call when a duration is
//! wanted, e.g. for [`RankingEntry::with_elapsed`](super::ranking::RankingEntry::with_elapsed).

use std::time::{Duration, Instant};


/// Runs `call` and returns its output with the elapsed time.
///
/// ```
/// use rootlab::root_finding::instrument::timed;
/// use rootlab::root_finding::newton::{newton, NewtonCfg};
///
/// let (res, elapsed) = timed(|| newton(|x| x * x - 2.0, |x| 2.0 * x, 1.0, NewtonCfg::new()));
/// assert!(res.is_ok());
/// assert!(elapsed.as_secs() < 1);
/// ```
pub fn timed<T, F>(call: F) -> (T, Duration)
where F: FnOnce() -> T {
    let start = Instant::now();
    let out   = call();
    (out, start.elapsed())
}
