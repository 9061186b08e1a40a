//! Shared helpers for the end-to-end tests.

use raphson_solve::equation::newton::{self, Config, Error, Iterates};
use raphson_symbolic::{Expr, Interpreter};

/// Parses `source`, panicking on malformed test input.
#[must_use]
pub fn expr(source: &str) -> Expr {
    source
        .parse()
        .unwrap_or_else(|err| panic!("invalid test expression {source:?}: {err}"))
}

/// Solves `source = 0` from `x0` with the interpreter backend.
///
/// # Errors
///
/// Returns the solver error unchanged.
pub fn solve(source: &str, x0: f64, config: &Config) -> Result<Iterates, Error> {
    newton::find_root_unobserved(&Interpreter, &expr(source), x0, config)
}

/// Solves with the default configuration.
///
/// # Errors
///
/// Returns the solver error unchanged.
pub fn solve_default(source: &str, x0: f64) -> Result<Iterates, Error> {
    solve(source, x0, &Config::default())
}
