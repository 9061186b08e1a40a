//! Solvers for equation problems: finding roots of `f(x) = 0`.
//!
//! # Solvers
//!
//! - [`newton`]: Newton–Raphson iteration using the exact symbolic derivative

pub mod newton;
