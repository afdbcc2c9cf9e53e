use approx::assert_abs_diff_eq;

use rootlab::root_finding::diagnostics::{diagnose, ConvergenceStatus};
use rootlab::root_finding::errors::RootFindingError;
use rootlab::root_finding::fixed_point::{
    fixed_point, FixedPointCfg, FixedPointError, StoppingCriterion,
};
use rootlab::root_finding::precision::PrecisionPolicy;
use rootlab::root_finding::report::TerminationReason;

type TestResult = Result<(), FixedPointError>;

const DOTTIE: f64 = 0.739_085_133_215_160_6;

#[test]
fn cos_by_step_size() -> TestResult {
    let g   = |x: f64| x.cos();
    let cfg = FixedPointCfg::new().set_criterion(StoppingCriterion::StepSize);

    let res = fixed_point(g, None::<fn(f64) -> f64>, 0.5, cfg)?;

    assert_eq!(res.termination, TerminationReason::ToleranceReached);
    assert_abs_diff_eq!(res.final_estimate, DOTTIE, epsilon = 1e-5);
    // trace holds step lengths
    assert_abs_diff_eq!(res.error_trace[0], (0.5_f64.cos() - 0.5).abs(), epsilon = 1e-15);
    assert_eq!(res.evaluations, res.iterations_used);
    Ok(())
}

#[test]
fn cos_by_residual() -> TestResult {
    let g   = |x: f64| x.cos();
    let f   = |x: f64| x.cos() - x;
    let cfg = FixedPointCfg::new().set_criterion(StoppingCriterion::Residual);

    let res = fixed_point(g, Some(f), 0.5, cfg)?;

    assert_eq!(res.termination, TerminationReason::ToleranceReached);
    assert!(f(res.final_estimate).abs() < 1e-6);
    assert_eq!(res.evaluations, 2 * res.iterations_used);
    Ok(())
}

#[test]
fn default_criterion_is_step_size() {
    assert_eq!(FixedPointCfg::new().criterion(), StoppingCriterion::StepSize);
}

#[test]
fn residual_needs_f() -> TestResult {
    let g   = |x: f64| x.cos();
    let cfg = FixedPointCfg::new().set_criterion(StoppingCriterion::Residual);

    let err = fixed_point(g, None::<fn(f64) -> f64>, 0.5, cfg).unwrap_err();

    assert!(matches!(err, FixedPointError::MissingResidualFunction));
    Ok(())
}

#[test]
fn divergence_is_not_an_error() -> TestResult {
    let g   = |x: f64| x * x;
    let f   = |x: f64| x * x - x;
    let cfg = FixedPointCfg::new().set_criterion(StoppingCriterion::Residual);

    let res = fixed_point(g, Some(f), 1.5, cfg)?;

    assert_eq!(res.termination, TerminationReason::NonFiniteIterate);
    assert!(res.final_estimate.is_infinite());
    assert_eq!(res.error_trace.last(), Some(&f64::INFINITY));

    // residuals grow strictly until f overflows, then stay at +inf
    let (finite, tail): (Vec<f64>, Vec<f64>) =
        res.error_trace.iter().partition(|e| e.is_finite());
    assert!(finite.len() >= 2);
    assert!(finite.windows(2).all(|w| w[1] > w[0]));
    assert!(tail.iter().all(|&e| e == f64::INFINITY));
    assert_eq!(&res.error_trace[..finite.len()], finite.as_slice());
    assert_eq!(res.iterations_used, res.error_trace.len());

    let diag = diagnose(f, &res, 1e-6);
    assert_eq!(diag.status, ConvergenceStatus::Diverged);
    Ok(())
}

#[test]
fn slow_divergence_hits_cap() -> TestResult {
    let g   = |x: f64| x + 1.0;
    let cfg = FixedPointCfg::new().set_max_iter(10)?;

    let res = fixed_point(g, None::<fn(f64) -> f64>, 0.0, cfg)?;

    assert_eq!(res.termination, TerminationReason::IterationLimit);
    assert_eq!(res.final_estimate, 10.0);
    assert!(res.error_trace.iter().all(|&e| e == 1.0));
    Ok(())
}

#[test]
fn domain_error() -> TestResult {
    let g   = |x: f64| x - 1.0;
    let f   = |x: f64| x.sqrt();
    let cfg = FixedPointCfg::new().set_criterion(StoppingCriterion::Residual);

    let err = fixed_point(g, Some(f), 0.5, cfg).unwrap_err();

    assert!(matches!(
        err,
        FixedPointError::RootFinding(RootFindingError::DomainError { x }) if x == -0.5
    ));
    Ok(())
}

#[test]
fn invalid_guess() -> TestResult {
    let g   = |x: f64| x.cos();
    let err = fixed_point(g, None::<fn(f64) -> f64>, f64::INFINITY, FixedPointCfg::new()).unwrap_err();

    assert!(matches!(err, FixedPointError::InvalidGuess { .. }));
    Ok(())
}

#[test]
fn truncated_iterates_stay_on_grid() -> TestResult {
    let g      = |x: f64| x.cos();
    let policy = PrecisionPolicy::truncated(3);
    let cfg    = FixedPointCfg::new().set_precision(policy);

    let res = fixed_point(g, None::<fn(f64) -> f64>, 0.5, cfg)?;

    assert!(res.iterates.iter().all(|&x| policy.apply(x) == x));
    assert_abs_diff_eq!(res.final_estimate, DOTTIE, epsilon = 2e-3);
    Ok(())
}
