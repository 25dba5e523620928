use crate::equation::{Equation, EquationError};

/// Default step for the forward-difference derivative.
pub const DEFAULT_STEP: f64 = 1e-6;

/// Approximates `df/dx` at `x` using a forward finite difference:
/// `(f(x + step) - f(x)) / step`.
///
/// # Errors
///
/// Domain errors from either evaluation propagate unchanged, so
/// differentiating near an excluded point fails the same way direct
/// evaluation does.
pub fn forward_diff(
    equation: &impl Equation,
    x: f64,
    step: f64,
) -> Result<f64, EquationError> {
    let ahead = equation.eval(x + step)?;
    let here = equation.eval(x)?;
    Ok((ahead - here) / step)
}
