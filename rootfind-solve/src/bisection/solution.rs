/// Indicates how the bisection solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The bracket narrowed to within the configured tolerance.
    Converged,
    /// The iteration budget ran out before the bracket narrowed enough.
    MaxIters,
    /// Stopped early by an observer decision.
    StoppedByObserver,
}

/// The result of a bisection solve.
#[derive(Debug, Clone, Copy)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,
    /// Best estimate of the root (the last bracket midpoint).
    pub x: f64,
    /// Residual at the reported root estimate.
    pub residual: f64,
    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl Solution {
    pub(super) fn new(x: f64, residual: f64, iters: usize, status: Status) -> Self {
        Self {
            status,
            x,
            residual,
            iters,
        }
    }
}
