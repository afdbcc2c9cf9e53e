use approx::assert_abs_diff_eq;

use rootlab::root_finding::errors::{RootFindingError, ToleranceError};
use rootlab::root_finding::newton::{newton, NewtonCfg, NewtonError};
use rootlab::root_finding::precision::PrecisionPolicy;
use rootlab::root_finding::report::TerminationReason;
use rootlab::root_finding::secant::{secant, SecantCfg};

type TestResult = Result<(), NewtonError>;

#[test]
fn finds_sqrt_2_quickly() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let df  = |x: f64| 2.0 * x;
    let tol = 1e-10;

    let cfg = NewtonCfg::new().set_tolerance(tol)?;
    let res = newton(f, df, 1.0, cfg)?;

    assert_eq!(res.termination, TerminationReason::ToleranceReached);
    assert!(res.iterations_used <= 10);
    assert_eq!(res.iterates[0], 1.5);
    assert_abs_diff_eq!(res.final_estimate, 1.414_213_56, epsilon = 1e-8);
    assert!(res.final_error().is_some_and(|e| e < tol));
    Ok(())
}

#[test]
fn not_slower_than_secant() -> Result<(), Box<dyn std::error::Error>> {
    let f  = |x: f64| x * x - 2.0;
    let df = |x: f64| 2.0 * x;

    let nwt = newton(f, df, 1.0, NewtonCfg::new().set_tolerance(1e-10)?)?;
    let sec = secant(f, 1.0, 2.0, SecantCfg::new().set_tolerance(1e-10)?)?;

    assert!(nwt.reached_tolerance() && sec.reached_tolerance());
    assert!(nwt.iterations_used <= sec.iterations_used);
    Ok(())
}

#[test]
fn finds_linear_root() -> TestResult {
    let f  = |x: f64| 2.0 * x - 6.0;
    let df = |_x: f64| 2.0;

    let res = newton(f, df, 10.0, NewtonCfg::new())?;

    assert_eq!(res.iterations_used, 1);
    assert_eq!(res.final_estimate, 3.0);
    // f(x0), then df and f once each
    assert_eq!(res.evaluations, 3);
    Ok(())
}

#[test]
fn zero_derivative_stops_early() -> TestResult {
    let f  = |x: f64| x * x - 1.0;
    let df = |x: f64| 2.0 * x;

    let res = newton(f, df, 0.0, NewtonCfg::new())?;

    assert_eq!(res.termination, TerminationReason::SingularDerivative);
    assert_eq!(res.iterations_used, 0);
    assert!(res.error_trace.is_empty());
    assert_eq!(res.final_estimate, 0.0);
    Ok(())
}

#[test]
fn subnormal_derivative_overflows_step() -> TestResult {
    let f  = |x: f64| x - 1.0;
    let df = |_x: f64| 1e-320;

    let res = newton(f, df, 2.0, NewtonCfg::new())?;

    assert_eq!(res.termination, TerminationReason::NonFiniteIterate);
    assert_eq!(res.iterations_used, 1);
    assert_eq!(res.final_estimate, f64::NEG_INFINITY);
    assert_eq!(res.error_trace, vec![f64::INFINITY]);
    Ok(())
}

#[test]
fn domain_error_mid_run() -> TestResult {
    // first step from 3 lands at x < 0
    let f  = |x: f64| x.ln();
    let df = |x: f64| 1.0 / x;

    let err = newton(f, df, 3.0, NewtonCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        NewtonError::RootFinding(RootFindingError::DomainError { x }) if x < 0.0
    ));
    Ok(())
}

#[test]
fn invalid_guess() -> TestResult {
    let f  = |x: f64| x;
    let df = |_x: f64| 1.0;

    let err = newton(f, df, f64::NAN, NewtonCfg::new()).unwrap_err();
    assert!(matches!(err, NewtonError::InvalidGuess { x0 } if x0.is_nan()));

    let err = newton(f, df, f64::INFINITY, NewtonCfg::new()).unwrap_err();
    assert!(matches!(err, NewtonError::InvalidGuess { .. }));
    Ok(())
}

#[test]
fn invalid_tolerance() {
    let err = NewtonCfg::new().set_tolerance(-1e-6).unwrap_err();
    assert!(matches!(err, ToleranceError::InvalidTolerance { .. }));
}

#[test]
fn narrowed_converges_on_f32_grid() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let df  = |x: f64| 2.0 * x;
    let cfg = NewtonCfg::new().set_precision(PrecisionPolicy::Narrowed);

    let res = newton(f, df, 1.0, cfg)?;

    assert_eq!(res.termination, TerminationReason::ToleranceReached);
    assert!(res.iterates.iter().all(|&x| f64::from(x as f32) == x));
    Ok(())
}

#[test]
fn truncated_iterates_stall() -> TestResult {
    let f      = |x: f64| x * x - 2.0;
    let df     = |x: f64| 2.0 * x;
    let policy = PrecisionPolicy::truncated(4);
    let cfg    = NewtonCfg::new().set_precision(policy).set_max_iter(30)?;

    let res = newton(f, df, 1.0, cfg)?;

    assert_eq!(res.termination, TerminationReason::IterationLimit);
    assert_eq!(res.iterations_used, 30);
    assert!(res.iterates.iter().all(|&x| policy.apply(x) == x));
    assert_abs_diff_eq!(res.final_estimate, 1.4142, epsilon = 1e-12);
    Ok(())
}
