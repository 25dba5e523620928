mod config;
mod error;
mod solution;

pub use config::Config;
pub use error::Error;
pub use solution::{Solution, Status};

use rootfind_core::{Equation, forward_diff};

use crate::observe::Observer;

/// Control actions supported by the Newton solver.
pub enum Action {
    /// Stop the solver early and report the current iterate.
    StopEarly,
}

/// Iteration event emitted by the Newton solver.
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Iterate after applying this iteration's step.
    pub x: f64,
    /// Step that was just taken, `f(x) / f'(x)`.
    pub delta: f64,
    /// Residual at the iterate the step was computed from.
    pub residual: f64,
}

/// Finds a root of the equation with Newton's method.
///
/// Each iteration steps by `f(x) / f'(x)`, with the derivative
/// approximated by a forward finite difference. The first step is
/// always taken; the solve converges once a step is no larger than
/// `config.step_tol`.
///
/// # Errors
///
/// Returns an error if the config or starting point is invalid, if an
/// evaluation fails or produces a non-finite value, or if the
/// approximated derivative is exactly zero (the step would be
/// infinite).
pub fn solve<E, Obs>(
    equation: &E,
    start: f64,
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

    if !start.is_finite() {
        return Err(Error::NonFiniteStart { value: start });
    }

    let mut x = start;
    for iter in 1..=config.max_iters {
        let residual = equation.eval(x)?;
        if !residual.is_finite() {
            return Err(Error::NonFiniteResidual { x, residual });
        }

        let derivative = forward_diff(equation, x, config.derivative_step)?;
        if !derivative.is_finite() {
            return Err(Error::NonFiniteDerivative { x, derivative });
        }
        if derivative == 0.0 {
            return Err(Error::ZeroDerivative { x });
        }

        let delta = residual / derivative;
        x -= delta;

        let event = Event {
            iter,
            x,
            delta,
            residual,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            let residual = equation.eval(x)?;
            return Ok(Solution::new(x, residual, iter, Status::StoppedByObserver));
        }

        if delta.abs() <= config.step_tol {
            let residual = equation.eval(x)?;
            return Ok(Solution::new(x, residual, iter, Status::Converged));
        }
    }

    let residual = equation.eval(x)?;
    Ok(Solution::new(
        x,
        residual,
        config.max_iters,
        Status::MaxIters,
    ))
}

/// Runs Newton's method without observation.
///
/// # Errors
///
/// Same error conditions as [`solve`].
pub fn solve_unobserved<E: Equation>(
    equation: &E,
    start: f64,
    config: &Config,
) -> Result<Solution, Error> {
    solve(equation, start, config, ())
}
