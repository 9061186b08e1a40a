//! Newton–Raphson root finding for a symbolic function of one variable.
//!
//! # Algorithm
//!
//! Starting from an initial guess `x0`, each iteration replaces the latest
//! estimate `x` with
//!
//! ```text
//! x_new = x - f(x) / f'(x)
//! ```
//!
//! The derivative `f'` is obtained once, by symbolic differentiation of the
//! expression, before the first iteration. The solve converges as soon as two
//! consecutive estimates differ by less than [`Config::tol`], and the whole
//! history of estimates is returned as [`Iterates`].
//!
//! # Independent Variable
//!
//! [`find_root`] uses the first entry of [`Expression::free_variables`], or
//! [`Variable::default`] when the expression has no free variables. The order
//! of free variables is defined by the backend, so expressions with several
//! free variables should go through [`find_root_in`] with an explicit
//! variable instead.
//!
//! # Failures
//!
//! - [`Error::ZeroDerivative`]: `f'(x)` is exactly zero at some estimate.
//!   Only exact zero stops the solve; a tiny but nonzero derivative produces a
//!   correspondingly large step.
//! - [`Error::NonConvergence`]: [`Config::max_iters`] iterations completed
//!   without meeting the tolerance.
//!
//! No partial history is returned on failure. Non-finite values of `f` or
//! `f'` are not failures on their own; they propagate through the update and
//! the solve ends in [`Error::NonConvergence`].
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after computing the new
//! estimate and before checking convergence. Observers can return
//! [`Action::StopEarly`] to abort with [`Error::StoppedByObserver`].

mod action;
mod config;
mod error;
mod event;
mod iterates;
mod setup;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use iterates::Iterates;

use raphson_core::{Expression, Lambdify, Observer, Variable};

use setup::Setup;

/// Finds a root of `expr` by Newton–Raphson iteration from `x0`.
///
/// The independent variable is chosen with [`select_variable`].
/// The observer receives an [`Event`] for every iteration.
///
/// # Errors
///
/// Returns [`Error::ZeroDerivative`] or [`Error::NonConvergence`] when the
/// iteration fails, [`Error::NonFiniteGuess`] if `x0` is not finite, and
/// the remaining variants when the backend fails or the observer stops.
pub fn find_root<E, B, Obs>(
    backend: &B,
    expr: &E,
    x0: f64,
    config: &Config,
    observer: Obs,
) -> Result<Iterates, Error>
where
    E: Expression,
    B: Lambdify<E>,
    Obs: Observer<Event, Action>,
{
    let var = select_variable(expr);
    find_root_in(backend, expr, &var, x0, config, observer)
}

/// Finds a root of `expr` without observer support.
///
/// This is a convenience wrapper around [`find_root`] that uses a no-op observer.
///
/// # Errors
///
/// See [`find_root`].
pub fn find_root_unobserved<E, B>(
    backend: &B,
    expr: &E,
    x0: f64,
    config: &Config,
) -> Result<Iterates, Error>
where
    E: Expression,
    B: Lambdify<E>,
{
    find_root(backend, expr, x0, config, ())
}

/// Finds a root of `expr` treated as a function of `var`.
///
/// # Errors
///
/// See [`find_root`].
pub fn find_root_in<E, B, Obs>(
    backend: &B,
    expr: &E,
    var: &Variable,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Iterates, Error>
where
    E: Expression,
    B: Lambdify<E>,
    Obs: Observer<Event, Action>,
{
    if !x0.is_finite() {
        return Err(Error::NonFiniteGuess { x0 });
    }

    let setup = Setup::new(backend, expr, var)?;
    let mut iterates = Iterates::new(x0);

    for iter in 1..=config.max_iters() {
        let x = iterates.last();

        let derivative = setup.derivative(x)?;
        #[allow(clippy::float_cmp)]
        if derivative == 0.0 {
            return Err(Error::ZeroDerivative { iter, x });
        }

        let value = setup.value(x)?;
        let next = x - value / derivative;
        iterates.push(next);

        let event = Event {
            iter,
            x,
            value,
            derivative,
            next,
        };
        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => return Err(Error::StoppedByObserver { iter }),
            }
        }

        if (next - x).abs() < config.tol() {
            return Ok(iterates);
        }
    }

    Err(Error::NonConvergence {
        max_iters: config.max_iters(),
    })
}

/// Picks the independent variable of `expr`.
///
/// Returns the first free variable in the backend's order, or
/// [`Variable::default`] for expressions without free variables.
pub fn select_variable<E: Expression>(expr: &E) -> Variable {
    expr.free_variables().into_iter().next().unwrap_or_default()
}
