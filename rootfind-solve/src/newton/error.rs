use thiserror::Error;

use rootfind_core::EquationError;

/// Errors that can occur during Newton solving.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("starting point is not finite: {value}")]
    NonFiniteStart { value: f64 },

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },

    #[error("non-finite derivative {derivative} at x = {x}")]
    NonFiniteDerivative { x: f64, derivative: f64 },

    #[error("derivative is zero at x = {x}, the Newton step is undefined")]
    ZeroDerivative { x: f64 },

    #[error(transparent)]
    Equation(#[from] EquationError),
}
