use std::convert::Infallible;

use raphson_core::{Expression, Function, Lambdify, Variable};
use thiserror::Error;

use crate::expr::Expr;

/// Errors that can occur when building a [`Lambda`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LambdifyError {
    #[error("expression depends on {name}, which is not bound (bound variable is {bound})")]
    UnboundVariable { name: Variable, bound: Variable },
}

/// Evaluates expressions by walking the tree with `f64` arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Interpreter;

impl Lambdify<Expr> for Interpreter {
    type Function = Lambda;
    type Error = LambdifyError;

    /// Binds `var` and checks that no other variable remains free.
    fn lambdify(&self, expr: &Expr, var: &Variable) -> Result<Lambda, LambdifyError> {
        if let Some(name) = expr.free_variables().into_iter().find(|v| v != var) {
            return Err(LambdifyError::UnboundVariable {
                name,
                bound: var.clone(),
            });
        }

        Ok(Lambda {
            expr: expr.clone(),
            var: var.clone(),
        })
    }
}

/// An expression bound to a single variable, ready to evaluate.
#[derive(Debug, Clone, PartialEq)]
pub struct Lambda {
    expr: Expr,
    var: Variable,
}

impl Lambda {
    /// Returns the bound variable.
    #[must_use]
    pub fn variable(&self) -> &Variable {
        &self.var
    }

    /// Returns the underlying expression.
    #[must_use]
    pub fn expr(&self) -> &Expr {
        &self.expr
    }
}

impl Function for Lambda {
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(eval(&self.expr, x))
    }
}

/// Evaluates `expr` with every variable set to `x`.
///
/// Only valid for expressions checked by [`Interpreter::lambdify`].
fn eval(expr: &Expr, x: f64) -> f64 {
    match expr {
        Expr::Num(n) => *n,
        Expr::Var(_) => x,
        Expr::Neg(a) => -eval(a, x),
        Expr::Add(a, b) => eval(a, x) + eval(b, x),
        Expr::Sub(a, b) => eval(a, x) - eval(b, x),
        Expr::Mul(a, b) => eval(a, x) * eval(b, x),
        Expr::Div(a, b) => eval(a, x) / eval(b, x),
        Expr::Pow(a, b) => eval(a, x).powf(eval(b, x)),
        Expr::Call(func, a) => func.apply(eval(a, x)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn lambda(source: &str) -> Lambda {
        let expr: Expr = source.parse().expect("valid expression");
        Interpreter
            .lambdify(&expr, &Variable::default())
            .expect("bound to x")
    }

    #[test]
    fn evaluates_polynomials() {
        let f = lambda("x^2 - 4");
        assert_relative_eq!(f.call(3.0).unwrap(), 5.0);
        assert_relative_eq!(f.call(-2.0).unwrap(), 0.0);
    }

    #[test]
    fn evaluates_functions() {
        let f = lambda("exp(ln(x)) + sin(0) * cos(x)");
        assert_relative_eq!(f.call(2.5).unwrap(), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn constants_ignore_input() {
        let f = lambda("2");
        assert_relative_eq!(f.call(1.0).unwrap(), 2.0);
        assert_relative_eq!(f.call(-1e9).unwrap(), 2.0);
    }

    #[test]
    fn follows_ieee_semantics() {
        assert!(lambda("1 / x").call(0.0).unwrap().is_infinite());
        assert!(lambda("sqrt(x)").call(-1.0).unwrap().is_nan());
        assert!(lambda("ln(x)").call(0.0).unwrap().is_infinite());
    }

    #[test]
    fn rejects_unbound_variables() {
        let expr: Expr = "x * y".parse().expect("valid expression");
        let err = Interpreter
            .lambdify(&expr, &Variable::new("x"))
            .expect_err("y is unbound");

        assert_eq!(
            err,
            LambdifyError::UnboundVariable {
                name: Variable::new("y"),
                bound: Variable::new("x"),
            }
        );
    }

    #[test]
    fn binds_non_default_variable() {
        let expr: Expr = "t^3".parse().expect("valid expression");
        let f = Interpreter
            .lambdify(&expr, &Variable::new("t"))
            .expect("bound to t");

        assert_eq!(f.variable().name(), "t");
        assert_relative_eq!(f.call(2.0).unwrap(), 8.0);
    }
}
