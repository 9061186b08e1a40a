//! A small symbolic backend for single-variable real functions.
//!
//! [`Expr`] is an expression tree that can be parsed from text, printed back,
//! differentiated exactly, and evaluated numerically through the
//! [`Interpreter`] backend. It implements the [`raphson_core`] traits so it
//! can be handed straight to a solver.
//!
//! # Example
//!
//! ```
//! use raphson_core::{Expression, Function, Lambdify, Variable};
//! use raphson_symbolic::{Expr, Interpreter};
//!
//! let f: Expr = "x^2 - 4".parse()?;
//! let x = Variable::new("x");
//!
//! let df = Interpreter.lambdify(&f.differentiate(&x)?, &x)?;
//! assert_eq!(df.call(3.0)?, 6.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Syntax
//!
//! From lowest to highest precedence:
//!
//! - `a + b`, `a - b` (left associative)
//! - `a * b`, `a / b` (left associative)
//! - unary `-a` and `+a`
//! - `a ^ b` or `a ** b` (right associative, so `-x^2` is `-(x^2)`)
//! - numbers (`2`, `0.5`, `1e-3`), variables, calls like `sin(x)`, and
//!   parenthesized expressions
//!
//! Supported functions are `sin`, `cos`, `tan`, `exp`, `ln` (also `log`), and
//! `sqrt`. Number literals must be finite, and nesting is limited to 256
//! levels.

mod diff;
mod display;
mod expr;
mod interpret;
mod parse;

pub use expr::{Expr, Func};
pub use interpret::{Interpreter, Lambda, LambdifyError};
pub use parse::{ParseError, parse};
