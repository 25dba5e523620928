use super::{Equation, EquationError};

/// Values of `x` closer to zero than this are rejected before any
/// division takes place.
pub const DOMAIN_TOL: f64 = 1e-6;

/// The trigonometric/rational form `cos(y/x) - 2 sin(1/x) + 1/x`.
///
/// The parameter `y` is fixed at construction; the solver varies `x`.
#[derive(Debug, Clone, Copy)]
pub struct Trigonometric {
    y: f64,
}

impl Trigonometric {
    /// Creates the equation with the given parameter `y`.
    pub fn new(y: f64) -> Self {
        Self { y }
    }
}

impl Equation for Trigonometric {
    fn eval(&self, x: f64) -> Result<f64, EquationError> {
        if x.abs() < DOMAIN_TOL {
            return Err(EquationError::NearZeroDivisor { x });
        }
        Ok((self.y / x).cos() - 2.0 * (1.0 / x).sin() + 1.0 / x)
    }
}
