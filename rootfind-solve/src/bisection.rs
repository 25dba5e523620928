mod config;
mod error;
mod solution;

pub use config::Config;
pub use error::Error;
pub use solution::{Solution, Status};

use rootfind_core::Equation;

use crate::observe::Observer;

/// Control actions supported by the bisection solver.
pub enum Action {
    /// Stop the solver early and report the current midpoint.
    StopEarly,
}

/// Iteration event emitted by the bisection solver.
pub struct Event {
    /// Iteration counter (1-based within the bisection loop).
    pub iter: usize,
    /// Current search bracket.
    pub bracket: [f64; 2],
    /// Midpoint that was just evaluated.
    pub x: f64,
    /// Residual at the midpoint.
    pub residual: f64,
}

/// Finds a root of the equation by interval halving.
///
/// The bracket is normalized so the smaller endpoint comes first, then
/// halved until it is narrower than `config.x_tol`. Each step keeps the
/// half whose endpoints still differ in sign: when `f(left)` and the
/// midpoint residual have the same sign the left endpoint advances,
/// otherwise the right endpoint retreats. A midpoint residual of
/// exactly zero retreats the right endpoint rather than exiting early,
/// so the final result is always the midpoint of a narrowed bracket.
///
/// # Errors
///
/// Returns an error if the config or bracket is invalid, if the
/// endpoints do not straddle a sign change, or if any evaluation fails
/// or produces a non-finite residual.
pub fn solve<E, Obs>(
    equation: &E,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    E: Equation,
    Obs: Observer<Event, Action>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let (mut left, mut right) = validate_bracket(bracket)?;

    let mut left_residual = residual_at(equation, left)?;
    let right_residual = residual_at(equation, right)?;

    if left_residual * right_residual > 0.0 {
        return Err(Error::NoBracket {
            left,
            right,
            left_residual,
            right_residual,
        });
    }

    let mut iters = 0;
    while (right - left).abs() > config.x_tol {
        if iters == config.max_iters {
            let mid = 0.5 * (left + right);
            let residual = residual_at(equation, mid)?;
            return Ok(Solution::new(mid, residual, iters, Status::MaxIters));
        }
        iters += 1;

        let mid = 0.5 * (left + right);
        let mid_residual = residual_at(equation, mid)?;

        let event = Event {
            iter: iters,
            bracket: [left, right],
            x: mid,
            residual: mid_residual,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(
                mid,
                mid_residual,
                iters,
                Status::StoppedByObserver,
            ));
        }

        if left_residual * mid_residual > 0.0 {
            left = mid;
            left_residual = mid_residual;
        } else {
            right = mid;
        }
    }

    let root = 0.5 * (left + right);
    let residual = residual_at(equation, root)?;
    Ok(Solution::new(root, residual, iters, Status::Converged))
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Same error conditions as [`solve`].
pub fn solve_unobserved<E: Equation>(
    equation: &E,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(equation, bracket, config, ())
}

/// Evaluates the equation and rejects non-finite residuals.
fn residual_at(equation: &impl Equation, x: f64) -> Result<f64, Error> {
    let residual = equation.eval(x)?;
    if residual.is_finite() {
        Ok(residual)
    } else {
        Err(Error::NonFiniteResidual { x, residual })
    }
}

/// Validates bracket values and returns them in left < right order.
fn validate_bracket(bracket: [f64; 2]) -> Result<(f64, f64), Error> {
    let [left, right] = bracket;

    if !left.is_finite() {
        return Err(Error::NonFiniteBracket { value: left });
    }

    if !right.is_finite() {
        return Err(Error::NonFiniteBracket { value: right });
    }

    #[allow(clippy::float_cmp)]
    if left == right {
        return Err(Error::ZeroWidthBracket { value: left });
    }

    if left < right {
        Ok((left, right))
    } else {
        Ok((right, left))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rootfind_core::EquationError;

    /// Equation with roots at plus and minus the square root of `target`.
    struct Square {
        target: f64,
    }
    impl Equation for Square {
        fn eval(&self, x: f64) -> Result<f64, EquationError> {
            Ok(x * x - self.target)
        }
    }

    /// Equation whose residual is `x` itself; its root is exactly zero.
    struct Identity;
    impl Equation for Identity {
        fn eval(&self, x: f64) -> Result<f64, EquationError> {
            Ok(x)
        }
    }

    /// Equation that always reports a domain error.
    struct AlwaysOutOfDomain;
    impl Equation for AlwaysOutOfDomain {
        fn eval(&self, x: f64) -> Result<f64, EquationError> {
            Err(EquationError::NearZeroDivisor { x })
        }
    }

    /// Equation that always returns NaN.
    struct AlwaysNan;
    impl Equation for AlwaysNan {
        fn eval(&self, _x: f64) -> Result<f64, EquationError> {
            Ok(f64::NAN)
        }
    }

    #[test]
    fn finds_square_root() {
        let solution =
            solve_unobserved(&Square { target: 9.0 }, [0.0, 10.0], &Config::default())
                .expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 3.0, epsilon = 1e-6);
        assert!(solution.residual.abs() < 1e-5);
    }

    #[test]
    fn final_bracket_is_narrower_than_the_tolerance() {
        let solution =
            solve_unobserved(&Square { target: 2.0 }, [0.0, 2.0], &Config::default())
                .expect("should solve");

        // 2 / 2^21 is the first halved width at or below 1e-6.
        assert_eq!(solution.iters, 21);
        assert_relative_eq!(solution.x, 2.0_f64.sqrt(), epsilon = 1e-6);
    }

    #[test]
    fn zero_midpoint_residual_narrows_toward_the_root() {
        // The first midpoint of [-1, 1] lands exactly on the root. The
        // solver keeps halving toward it from the left instead of
        // exiting early.
        let solution = solve_unobserved(&Identity, [-1.0, 1.0], &Config::default())
            .expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert!(solution.x <= 0.0);
        assert!(solution.x.abs() <= 1e-6);
    }

    #[test]
    fn normalizes_reversed_bracket() {
        let solution =
            solve_unobserved(&Square { target: 36.0 }, [10.0, 0.0], &Config::default())
                .expect("should solve with reversed bracket");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 6.0, epsilon = 1e-6);
    }

    #[test]
    fn errors_on_zero_width_bracket() {
        let result =
            solve_unobserved(&Square { target: 25.0 }, [5.0, 5.0], &Config::default());
        assert!(matches!(result, Err(Error::ZeroWidthBracket { .. })));
    }

    #[test]
    fn errors_on_non_finite_bracket() {
        let equation = Square { target: 4.0 };

        let result = solve_unobserved(&equation, [f64::NAN, 10.0], &Config::default());
        assert!(matches!(result, Err(Error::NonFiniteBracket { .. })));

        let result =
            solve_unobserved(&equation, [0.0, f64::INFINITY], &Config::default());
        assert!(matches!(result, Err(Error::NonFiniteBracket { .. })));
    }

    #[test]
    fn errors_when_endpoints_share_a_sign() {
        let result =
            solve_unobserved(&Square { target: 9.0 }, [5.0, 10.0], &Config::default());
        assert!(matches!(result, Err(Error::NoBracket { .. })));
    }

    #[test]
    fn errors_on_invalid_config() {
        let config = Config {
            x_tol: -1.0,
            ..Config::default()
        };
        let result = solve_unobserved(&Square { target: 4.0 }, [0.0, 10.0], &config);
        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn errors_on_domain_failure() {
        let result =
            solve_unobserved(&AlwaysOutOfDomain, [1.0, 2.0], &Config::default());
        assert!(matches!(result, Err(Error::Equation(_))));
    }

    #[test]
    fn errors_on_non_finite_residual() {
        let result = solve_unobserved(&AlwaysNan, [1.0, 2.0], &Config::default());
        assert!(matches!(result, Err(Error::NonFiniteResidual { .. })));
    }

    #[test]
    fn reports_max_iters_with_the_current_midpoint() {
        let config = Config {
            max_iters: 3,
            ..Config::default()
        };
        let solution = solve_unobserved(&Square { target: 9.0 }, [0.0, 10.0], &config)
            .expect("should report the iteration cap");

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 3);
        // After halving [0, 10] three times the bracket is [2.5, 3.75].
        assert_relative_eq!(solution.x, 3.125);
    }

    #[test]
    fn observer_can_stop_iteration() {
        let mut calls = 0_usize;
        let observer = |event: &Event| {
            calls += 1;
            (event.iter >= 3).then_some(Action::StopEarly)
        };

        let solution = solve(
            &Square { target: 9.0 },
            [0.0, 10.0],
            &Config::default(),
            observer,
        )
        .expect("should stop cleanly");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 3);
        assert_eq!(calls, 3);
    }
}
