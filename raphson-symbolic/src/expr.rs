use std::{
    convert::Infallible,
    ops::{Add, Div, Mul, Neg, Sub},
};

use raphson_core::{Expression, Variable};

use crate::diff::derivative;

/// A symbolic expression of real variables.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    /// A numeric literal.
    Num(f64),
    /// A free variable.
    Var(Variable),
    /// Negation, `-a`.
    Neg(Box<Expr>),
    /// Sum, `a + b`.
    Add(Box<Expr>, Box<Expr>),
    /// Difference, `a - b`.
    Sub(Box<Expr>, Box<Expr>),
    /// Product, `a * b`.
    Mul(Box<Expr>, Box<Expr>),
    /// Quotient, `a / b`.
    Div(Box<Expr>, Box<Expr>),
    /// Power, `a ^ b`.
    Pow(Box<Expr>, Box<Expr>),
    /// A call to one of the built-in functions.
    Call(Func, Box<Expr>),
}

/// Built-in functions of one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Exp,
    /// Natural logarithm.
    Ln,
    Sqrt,
}

impl Func {
    /// Looks up a function by name.
    ///
    /// `log` is accepted as an alias for the natural logarithm.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "exp" => Some(Self::Exp),
            "ln" | "log" => Some(Self::Ln),
            "sqrt" => Some(Self::Sqrt),
            _ => None,
        }
    }

    /// Returns the canonical name of the function.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Exp => "exp",
            Self::Ln => "ln",
            Self::Sqrt => "sqrt",
        }
    }

    /// Applies the function to a number.
    #[must_use]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Exp => x.exp(),
            Self::Ln => x.ln(),
            Self::Sqrt => x.sqrt(),
        }
    }
}

impl Expr {
    /// Creates a numeric literal.
    #[must_use]
    pub fn num(value: f64) -> Self {
        Self::Num(value)
    }

    /// Creates a variable reference.
    pub fn var(name: impl Into<Variable>) -> Self {
        Self::Var(name.into())
    }

    /// Raises `self` to the power `exponent`.
    #[must_use]
    pub fn pow(self, exponent: impl Into<Expr>) -> Self {
        Self::Pow(Box::new(self), Box::new(exponent.into()))
    }

    /// Applies a built-in function to `arg`.
    #[must_use]
    pub fn call(func: Func, arg: Expr) -> Self {
        Self::Call(func, Box::new(arg))
    }

    /// Returns true if `var` appears anywhere in the expression.
    #[must_use]
    pub fn contains(&self, var: &Variable) -> bool {
        match self {
            Self::Num(_) => false,
            Self::Var(v) => v == var,
            Self::Neg(a) | Self::Call(_, a) => a.contains(var),
            Self::Add(a, b)
            | Self::Sub(a, b)
            | Self::Mul(a, b)
            | Self::Div(a, b)
            | Self::Pow(a, b) => a.contains(var) || b.contains(var),
        }
    }

    /// Returns the distinct variables of the expression in the order they
    /// first appear, reading left to right.
    #[must_use]
    pub fn variables(&self) -> Vec<Variable> {
        let mut found = Vec::new();
        self.collect_variables(&mut found);
        found
    }

    fn collect_variables(&self, found: &mut Vec<Variable>) {
        match self {
            Self::Num(_) => {}
            Self::Var(v) => {
                if !found.contains(v) {
                    found.push(v.clone());
                }
            }
            Self::Neg(a) | Self::Call(_, a) => a.collect_variables(found),
            Self::Add(a, b)
            | Self::Sub(a, b)
            | Self::Mul(a, b)
            | Self::Div(a, b)
            | Self::Pow(a, b) => {
                a.collect_variables(found);
                b.collect_variables(found);
            }
        }
    }
}

impl Expression for Expr {
    type Error = Infallible;

    fn free_variables(&self) -> Vec<Variable> {
        self.variables()
    }

    fn differentiate(&self, var: &Variable) -> Result<Self, Self::Error> {
        Ok(derivative(self, var))
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Num(value)
    }
}

impl From<Variable> for Expr {
    fn from(var: Variable) -> Self {
        Self::Var(var)
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::Neg(Box::new(self))
    }
}

macro_rules! binary_op {
    ($trait:ident, $method:ident, $variant:ident) => {
        impl<T: Into<Expr>> $trait<T> for Expr {
            type Output = Expr;

            fn $method(self, rhs: T) -> Expr {
                Expr::$variant(Box::new(self), Box::new(rhs.into()))
            }
        }
    };
}

binary_op!(Add, add, Add);
binary_op!(Sub, sub, Sub);
binary_op!(Mul, mul, Mul);
binary_op!(Div, div, Div);
