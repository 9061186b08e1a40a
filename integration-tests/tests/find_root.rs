use approx::assert_abs_diff_eq;

use integration_tests::{expr, solve, solve_default};
use raphson_core::Variable;
use raphson_solve::equation::newton::{self, Config, Error, Event};
use raphson_symbolic::Interpreter;

#[test]
fn quadratic_converges_to_two() {
    let iterates = solve_default("x^2 - 4", 3.0).expect("should converge");
    assert_abs_diff_eq!(iterates.root(), 2.0, epsilon = 1e-6);
}

#[test]
fn looser_and_tighter_tolerances_all_converge() {
    for tol in [1e0, 1e-2, 1e-8, 1e-12] {
        let config = Config::new(tol, 200).expect("valid config");
        let iterates = solve("x^2 - 4", 3.0, &config).expect("should converge");

        assert_abs_diff_eq!(iterates.root(), 2.0, epsilon = tol);
    }
}

#[test]
fn looser_tolerance_stops_sooner() {
    let loose = Config::new(1e0, 200).expect("valid config");
    let tight = Config::new(1e-12, 200).expect("valid config");

    let loose = solve("x^2 - 4", 3.0, &loose).expect("should converge");
    let tight = solve("x^2 - 4", 3.0, &tight).expect("should converge");

    assert_eq!(loose.iters(), 1);
    assert!(tight.iters() > loose.iters());
    assert_eq!(&tight[..loose.len()], loose.as_slice());
}

#[test]
fn constant_raises_zero_derivative() {
    let result = solve_default("2", 1.0);
    assert!(matches!(result, Err(Error::ZeroDerivative { iter: 1, .. })));
}

#[test]
fn cancelling_terms_raise_zero_derivative() {
    let result = solve_default("x - x + 3", 10.0);
    assert!(matches!(result, Err(Error::ZeroDerivative { iter: 1, .. })));
}

#[test]
fn zero_exponent_raises_zero_derivative_at_the_pole() {
    let result = solve_default("x^0 + 1", 0.0);
    assert!(matches!(result, Err(Error::ZeroDerivative { iter: 1, .. })));
}

#[test]
#[allow(clippy::float_cmp)]
fn step_equal_to_tolerance_keeps_iterating() {
    let config = Config::new(0.5, 20).expect("valid config");
    let iterates = solve("x - 0.5", 1.0, &config).expect("should converge");

    assert_eq!(iterates.as_slice(), [1.0, 0.5, 0.5]);
}

#[test]
fn far_initial_guess_on_cubic_does_not_converge() {
    let result = solve_default("x^3", 1000.0);
    assert!(matches!(result, Err(Error::NonConvergence { max_iters: 20 })));
}

#[test]
fn cubic_converges_with_enough_iterations() {
    let config = Config::new(1e-6, 100).expect("valid config");
    let iterates = solve("x^3", 1000.0, &config).expect("should converge");

    // Convergence to a triple root is linear, so the estimate lags the step.
    assert_abs_diff_eq!(iterates.root(), 0.0, epsilon = 1e-5);
}

#[test]
#[allow(clippy::float_cmp)]
fn first_iterate_is_the_initial_guess() {
    for x0 in [3.0, 0.5, -7.25, 10.0] {
        let iterates = solve_default("x^2 - 4", x0).expect("should converge");
        assert_eq!(iterates.first(), x0);
    }
}

#[test]
fn repeated_calls_give_identical_results() {
    let first = solve_default("cos(x) - x", 1.0).expect("should converge");
    let second = solve_default("cos(x) - x", 1.0).expect("should converge");
    assert_eq!(first, second);

    let first = solve_default("x^3", 1000.0).expect_err("should fail");
    let second = solve_default("x^3", 1000.0).expect_err("should fail");
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn transcendental_roots() {
    let iterates = solve_default("cos(x) - x", 1.0).expect("should converge");
    assert_abs_diff_eq!(iterates.root(), 0.739_085_133_215_160_6, epsilon = 1e-9);

    let iterates = solve_default("exp(x) - 2", 0.0).expect("should converge");
    assert_abs_diff_eq!(iterates.root(), 2_f64.ln(), epsilon = 1e-9);

    let iterates = solve_default("sin(x)", 3.0).expect("should converge");
    assert_abs_diff_eq!(iterates.root(), std::f64::consts::PI, epsilon = 1e-9);
}

#[test]
fn uses_the_only_free_variable() {
    let iterates = solve_default("t^2 - 2", 1.0).expect("should converge");
    assert_abs_diff_eq!(iterates.root(), 2_f64.sqrt(), epsilon = 1e-9);
}

#[test]
fn picks_first_variable_of_multivariate_expression() {
    let f = expr("y * x - 1");
    assert_eq!(newton::select_variable(&f), Variable::new("y"));

    // `x` stays free after binding `y`, so no evaluator can be built.
    let result = newton::find_root_unobserved(&Interpreter, &f, 1.0, &Config::default());
    assert!(matches!(result, Err(Error::Lambdify(_))));
}

#[test]
fn explicit_variable_overrides_selection() {
    let f = expr("z^2 - 9");
    let result = newton::find_root_in(
        &Interpreter,
        &f,
        &Variable::new("x"),
        1.0,
        &Config::default(),
        (),
    );
    assert!(matches!(result, Err(Error::Lambdify(_))));

    let iterates = newton::find_root_in(
        &Interpreter,
        &f,
        &Variable::new("z"),
        1.0,
        &Config::default(),
        (),
    )
    .expect("should converge");
    assert_abs_diff_eq!(iterates.root(), 3.0, epsilon = 1e-9);
}

#[test]
fn observer_trace_matches_iterates() {
    let mut steps = Vec::new();
    let observer = |event: &Event| {
        steps.push(event.step());
        None
    };

    let iterates = newton::find_root(
        &Interpreter,
        &expr("x^2 - 4"),
        3.0,
        &Config::default(),
        observer,
    )
    .expect("should converge");

    let expected: Vec<f64> = iterates.windows(2).map(|pair| pair[1] - pair[0]).collect();
    assert_eq!(steps, expected);
}

#[test]
fn error_messages() {
    let err = solve_default("2", 1.0).expect_err("zero derivative");
    assert_eq!(err.to_string(), "first derivative is zero at x = 1 (iteration 1)");

    let err = solve_default("x^3", 1000.0).expect_err("non-convergence");
    assert_eq!(
        err.to_string(),
        "Newton method did not converge within 20 iterations"
    );
}
