mod error;
mod logarithmic;
mod trigonometric;

pub use error::EquationError;
pub use logarithmic::Logarithmic;
pub use trigonometric::Trigonometric;

/// A scalar equation `f(x) = 0` whose root is sought.
///
/// Implementations must be deterministic, always producing the same
/// residual for a given `x`, which makes them a stable foundation for
/// iterative solvers.
pub trait Equation {
    /// Evaluates the residual `f(x)`.
    ///
    /// # Errors
    ///
    /// Returns [`EquationError`] when `x` lies outside the domain the
    /// equation checks for. Equations that leave part of their domain
    /// unchecked may return a non-finite residual instead; solvers are
    /// expected to detect that case themselves.
    fn eval(&self, x: f64) -> Result<f64, EquationError>;
}
