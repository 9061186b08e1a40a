//! Numerical solvers built on the Raphson core traits.
//!
//! Solvers consume any [`Expression`] together with a [`Lambdify`] backend,
//! so they are independent of the symbolic representation in use.
//!
//! [`Expression`]: raphson_core::Expression
//! [`Lambdify`]: raphson_core::Lambdify

pub mod equation;
