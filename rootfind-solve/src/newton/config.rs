use rootfind_core::DEFAULT_STEP;

/// Configuration for the Newton solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Iteration budget before the solver gives up.
    pub max_iters: usize,
    /// The solve converges once a Newton step is at most this large.
    pub step_tol: f64,
    /// Step used by the forward-difference derivative.
    pub derivative_step: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            step_tol: 1e-6,
            derivative_step: DEFAULT_STEP,
        }
    }
}

impl Config {
    /// Validates the iteration budget, tolerance, and derivative step.
    ///
    /// # Errors
    ///
    /// Returns an error describing the offending field.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.max_iters == 0 {
            return Err("max_iters must be at least 1");
        }
        if !self.step_tol.is_finite() || self.step_tol < 0.0 {
            return Err("step_tol must be finite and non-negative");
        }
        if !self.derivative_step.is_finite() || self.derivative_step <= 0.0 {
            return Err("derivative_step must be finite and positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_fields() {
        let no_budget = Config {
            max_iters: 0,
            ..Config::default()
        };
        assert!(no_budget.validate().is_err());

        let negative_tol = Config {
            step_tol: -1.0,
            ..Config::default()
        };
        assert!(negative_tol.validate().is_err());

        let zero_step = Config {
            derivative_step: 0.0,
            ..Config::default()
        };
        assert!(zero_step.validate().is_err());
    }
}
