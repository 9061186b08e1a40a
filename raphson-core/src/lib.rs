//! Core traits and types shared by the Raphson crates.
//!
//! The solver never touches a concrete symbolic representation. It works
//! through these seams instead:
//!
//! - [`Expression`]: a symbolic function that can list its free variables and
//!   differentiate itself
//! - [`Lambdify`]: a numeric backend that turns an expression into a callable
//! - [`Function`]: a built numeric evaluator mapping `f64` to `f64`
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`Variable`]: the name of an independent variable

mod expression;
mod function;
mod observer;
mod variable;

pub use expression::{Expression, Lambdify};
pub use function::Function;
pub use observer::Observer;
pub use variable::Variable;
