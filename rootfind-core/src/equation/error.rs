use thiserror::Error;

/// Errors produced when an equation is evaluated outside its domain.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EquationError {
    /// The evaluated form divides by `x`, which is too close to zero.
    #[error("equation is not defined for x near zero (x = {x})")]
    NearZeroDivisor { x: f64 },
}
