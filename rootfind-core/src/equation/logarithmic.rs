use super::{Equation, EquationError};

/// The logarithmic form `sin(ln x) - cos(ln x) + y ln x`.
///
/// Evaluation does not guard against `x <= 0`; `ln` of a non-positive
/// value yields NaN, which flows out as a non-finite residual for the
/// solver to detect.
#[derive(Debug, Clone, Copy)]
pub struct Logarithmic {
    y: f64,
}

impl Logarithmic {
    /// Creates the equation with the given parameter `y`.
    pub fn new(y: f64) -> Self {
        Self { y }
    }
}

impl Equation for Logarithmic {
    fn eval(&self, x: f64) -> Result<f64, EquationError> {
        let ln_x = x.ln();
        Ok(ln_x.sin() - ln_x.cos() + self.y * ln_x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn evaluates_at_a_known_point() {
        // At x = 1, ln x = 0, so f = sin(0) - cos(0) + 0 = -1.
        let eq = Logarithmic::new(1.0);
        assert_relative_eq!(eq.eval(1.0).unwrap(), -1.0, epsilon = 1e-15);
    }

    #[test]
    fn non_positive_x_yields_nan_rather_than_an_error() {
        let eq = Logarithmic::new(1.0);
        assert!(eq.eval(0.0).unwrap().is_nan());
        assert!(eq.eval(-2.0).unwrap().is_nan());
    }

    #[test]
    fn is_deterministic() {
        let eq = Logarithmic::new(4.5);
        assert_eq!(eq.eval(1.75), eq.eval(1.75));
    }
}
