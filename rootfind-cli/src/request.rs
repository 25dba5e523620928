use clap::ValueEnum;
use thiserror::Error;

/// Interval endpoints must lie within these bounds.
pub const LOWER_BOUND: f64 = -100.0;
pub const UPPER_BOUND: f64 = 100.0;

/// The parameter `y` must have a magnitude below this limit.
pub const Y_LIMIT: f64 = 10.0;

/// Which of the two supported equation families to solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EquationKind {
    /// `cos(y/x) - 2 sin(1/x) + 1/x = 0`
    #[value(alias = "1")]
    Trigonometric,
    /// `sin(ln x) - cos(ln x) + y ln x = 0`
    #[value(alias = "2")]
    Logarithmic,
}

impl EquationKind {
    /// Maps the menu selector (1 or 2) to an equation.
    pub fn from_selector(selector: u8) -> Option<Self> {
        match selector {
            1 => Some(Self::Trigonometric),
            2 => Some(Self::Logarithmic),
            _ => None,
        }
    }
}

/// Which root-finding method to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodKind {
    #[value(alias = "1")]
    Bisection,
    #[value(alias = "2")]
    Newton,
}

impl MethodKind {
    /// Maps the menu selector (1 or 2) to a method.
    pub fn from_selector(selector: u8) -> Option<Self> {
        match selector {
            1 => Some(Self::Bisection),
            2 => Some(Self::Newton),
            _ => None,
        }
    }
}

/// Reasons a solve request fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RequestError {
    #[error("interval endpoint {value} is outside [-100, 100]")]
    EndpointOutOfBounds { value: f64 },

    #[error("interval is invalid: a = {a} must be less than b = {b}")]
    EmptyInterval { a: f64, b: f64 },

    #[error("parameter y = {y} must lie in (-10, 0) or (0, 10)")]
    ParameterOutOfRange { y: f64 },
}

/// A fully validated solve request.
///
/// Construction is the single validation point: any value that reaches
/// the solvers has passed the interval and parameter checks.
#[derive(Debug, Clone, Copy)]
pub struct SolveRequest {
    pub equation: EquationKind,
    pub method: MethodKind,
    pub a: f64,
    pub b: f64,
    pub y: f64,
}

impl SolveRequest {
    /// Validates the inputs and builds a request.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if an endpoint is out of bounds, the
    /// interval is empty, or the parameter is out of range.
    pub fn new(
        equation: EquationKind,
        method: MethodKind,
        a: f64,
        b: f64,
        y: f64,
    ) -> Result<Self, RequestError> {
        validate_interval(a, b)?;
        validate_parameter(y)?;
        Ok(Self {
            equation,
            method,
            a,
            b,
            y,
        })
    }
}

/// Checks that both endpoints are in bounds and that `a < b`.
///
/// # Errors
///
/// Returns [`RequestError`] describing the first failed check.
pub fn validate_interval(a: f64, b: f64) -> Result<(), RequestError> {
    for value in [a, b] {
        if !(LOWER_BOUND..=UPPER_BOUND).contains(&value) {
            return Err(RequestError::EndpointOutOfBounds { value });
        }
    }
    if a >= b {
        return Err(RequestError::EmptyInterval { a, b });
    }
    Ok(())
}

/// Checks that `y` is finite, nonzero, and within `(-10, 10)`.
///
/// # Errors
///
/// Returns [`RequestError::ParameterOutOfRange`] otherwise.
#[allow(clippy::float_cmp)]
pub fn validate_parameter(y: f64) -> Result<(), RequestError> {
    if !y.is_finite() || y <= -Y_LIMIT || y >= Y_LIMIT || y == 0.0 {
        return Err(RequestError::ParameterOutOfRange { y });
    }
    Ok(())
}
