use approx::assert_abs_diff_eq;

use rootlab::root_finding::errors::RootFindingError;
use rootlab::root_finding::precision::PrecisionPolicy;
use rootlab::root_finding::report::TerminationReason;
use rootlab::root_finding::secant::{secant, SecantCfg, SecantError};

type TestResult = Result<(), SecantError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let tol = 1e-12;

    let cfg = SecantCfg::new().set_tolerance(tol)?.set_max_iter(50)?;
    let res = secant(f, 1.0, 2.0, cfg)?;

    assert_eq!(res.termination, TerminationReason::ToleranceReached);
    assert_abs_diff_eq!(res.final_estimate, 2.0_f64.sqrt(), epsilon = 1e-11);
    assert_eq!(res.iterations_used, res.error_trace.len());
    assert_eq!(res.iterates.len(), res.iterations_used);
    Ok(())
}

#[test]
fn first_step_is_secant_intercept() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let res = secant(f, 1.0, 2.0, SecantCfg::new())?;

    // line through (1, -1) and (2, 2)
    assert_abs_diff_eq!(res.iterates[0], 4.0 / 3.0, epsilon = 1e-15);
    Ok(())
}

#[test]
fn flat_secant_stagnates() -> TestResult {
    let f   = |x: f64| x * x;
    let res = secant(f, -1.0, 1.0, SecantCfg::new())?;

    assert_eq!(res.termination, TerminationReason::StagnantSecant);
    assert_eq!(res.iterations_used, 0);
    assert_eq!(res.final_estimate, 1.0);
    assert_eq!(res.evaluations, 2);
    Ok(())
}

#[test]
fn equal_seeds_are_not_an_error() -> TestResult {
    let f   = |x: f64| x - 1.0;
    let res = secant(f, 3.0, 3.0, SecantCfg::new())?;

    assert_eq!(res.termination, TerminationReason::StagnantSecant);
    assert_eq!(res.iterations_used, 0);
    Ok(())
}

#[test]
fn overflowing_step_stops() -> TestResult {
    // x1 - x0 and f1 - f0 both overflow, so the step is inf / inf
    let f   = |x: f64| x;
    let res = secant(f, -1e308, 1e308, SecantCfg::new())?;

    assert_eq!(res.termination, TerminationReason::NonFiniteIterate);
    assert_eq!(res.iterations_used, 1);
    assert!(!res.final_estimate.is_finite());
    assert_eq!(res.error_trace, vec![f64::INFINITY]);
    Ok(())
}

#[test]
fn non_finite_seed() -> TestResult {
    let f   = |x: f64| x - 1.0;
    let err = secant(f, f64::NAN, 1.0, SecantCfg::new()).unwrap_err();

    assert!(matches!(err, SecantError::InvalidGuess { x1, .. } if x1 == 1.0));
    Ok(())
}

#[test]
fn domain_error() -> TestResult {
    let f   = |x: f64| (x - 0.5).sqrt() - 1.0;
    let err = secant(f, 0.0, 2.0, SecantCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        SecantError::RootFinding(RootFindingError::DomainError { x }) if x == 0.0
    ));
    Ok(())
}

#[test]
fn seeds_are_coerced() -> TestResult {
    let f      = |x: f64| x * x - 2.0;
    let policy = PrecisionPolicy::truncated(6);
    let cfg    = SecantCfg::new().set_precision(policy);

    let res = secant(f, 1.000_000_9, 2.000_000_9, cfg)?;

    assert!(res.iterates.iter().all(|&x| policy.apply(x) == x));
    assert_abs_diff_eq!(res.iterates[0], policy.apply(4.0 / 3.0), epsilon = 1e-15);
    Ok(())
}
