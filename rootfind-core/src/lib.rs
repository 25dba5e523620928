//! Scalar equation definitions shared by the rootfind solvers.
//!
//! This crate provides the [`Equation`] trait, the two supported
//! equation families, and a forward-difference differentiator.

mod derivative;
mod equation;

pub use derivative::{DEFAULT_STEP, forward_diff};
pub use equation::{Equation, EquationError, Logarithmic, Trigonometric};
