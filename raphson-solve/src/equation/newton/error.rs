use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur during Newton–Raphson iteration.
#[derive(Debug, Error)]
pub enum Error {
    #[error("first derivative is zero at x = {x} (iteration {iter})")]
    ZeroDerivative { iter: usize, x: f64 },

    #[error("Newton method did not converge within {max_iters} iterations")]
    NonConvergence { max_iters: usize },

    #[error("initial guess must be finite, got {x0}")]
    NonFiniteGuess { x0: f64 },

    #[error("failed to differentiate expression")]
    Differentiate(#[source] Box<dyn StdError + Send + Sync>),

    #[error("failed to build numeric evaluator")]
    Lambdify(#[source] Box<dyn StdError + Send + Sync>),

    #[error("function evaluation failed at x = {x}")]
    Function {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("derivative evaluation failed at x = {x}")]
    Derivative {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("stopped by observer at iteration {iter}")]
    StoppedByObserver { iter: usize },
}
