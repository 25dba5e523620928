//! Root-finding solvers for scalar equations.
//!
//! Two methods are provided, each in its own module with its own
//! configuration, error, and solution types:
//!
//! - [`bisection`] halves a sign-changing bracket until it is narrower
//!   than a tolerance.
//! - [`newton`] refines an initial guess with Newton steps, using a
//!   forward-difference derivative.
//!
//! Both solvers accept an [`Observer`] that sees every iteration and
//! may stop the solve early.

pub mod bisection;
pub mod newton;

mod observe;

pub use observe::Observer;
