use raphson_core::{Expression, Function, Lambdify, Variable};

use super::Error;

/// Numeric evaluators for a function and its derivative.
///
/// Built once per solve, so the expression is differentiated exactly once.
pub(super) struct Setup<F> {
    function: F,
    derivative: F,
}

impl<F: Function> Setup<F> {
    /// Lambdifies `expr` and its derivative with respect to `var`.
    ///
    /// # Errors
    ///
    /// Returns an error if differentiation or evaluator construction fails.
    pub(super) fn new<E, B>(backend: &B, expr: &E, var: &Variable) -> Result<Self, Error>
    where
        E: Expression,
        B: Lambdify<E, Function = F>,
    {
        let function = backend
            .lambdify(expr, var)
            .map_err(|e| Error::Lambdify(Box::new(e)))?;

        let derivative = expr
            .differentiate(var)
            .map_err(|e| Error::Differentiate(Box::new(e)))?;
        let derivative = backend
            .lambdify(&derivative, var)
            .map_err(|e| Error::Lambdify(Box::new(e)))?;

        Ok(Self {
            function,
            derivative,
        })
    }

    /// Evaluates the function at `x`.
    pub(super) fn value(&self, x: f64) -> Result<f64, Error> {
        self.function.call(x).map_err(|e| Error::Function {
            x,
            source: Box::new(e),
        })
    }

    /// Evaluates the derivative at `x`.
    pub(super) fn derivative(&self, x: f64) -> Result<f64, Error> {
        self.derivative.call(x).map_err(|e| Error::Derivative {
            x,
            source: Box::new(e),
        })
    }
}
