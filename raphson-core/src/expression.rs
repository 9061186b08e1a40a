use crate::{Function, Variable};

/// A symbolic real-valued expression.
///
/// This is the only view of a symbolic backend that solvers rely on.
pub trait Expression: Sized {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the distinct free variables of the expression.
    ///
    /// The order is defined by the backend but must be deterministic for a
    /// given expression, since solvers pick the first entry as the
    /// independent variable.
    fn free_variables(&self) -> Vec<Variable>;

    /// Returns the exact symbolic derivative with respect to `var`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot differentiate the expression.
    fn differentiate(&self, var: &Variable) -> Result<Self, Self::Error>;
}

/// A numeric backend that builds evaluators for expressions of type `E`.
pub trait Lambdify<E> {
    type Function: Function;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds a numeric evaluator of `expr` over `var`.
    ///
    /// # Errors
    ///
    /// Returns an error if the expression cannot be evaluated as a function
    /// of `var` alone.
    fn lambdify(&self, expr: &E, var: &Variable) -> Result<Self::Function, Self::Error>;
}
