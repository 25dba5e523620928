/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Iteration budget before the solver gives up.
    pub max_iters: usize,
    /// The solve converges once the bracket is at most this wide.
    pub x_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 200,
            x_tol: 1e-6,
        }
    }
}

impl Config {
    /// Validates that the tolerance is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error describing the offending field.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.x_tol.is_finite() || self.x_tol < 0.0 {
            return Err("x_tol must be finite and non-negative");
        }
        Ok(())
    }
}
