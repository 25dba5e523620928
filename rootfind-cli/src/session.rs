use std::io::{self, BufRead, Write};

use log::{debug, error};
use thiserror::Error;

use rootfind_core::{Equation, Logarithmic, Trigonometric};
use rootfind_solve::{bisection, newton};

use crate::args::SolveArgs;
use crate::request::{
    EquationKind, MethodKind, SolveRequest, validate_interval, validate_parameter,
};

/// Outcome of a dispatched solve, independent of the method used.
pub struct Outcome {
    pub x: f64,
    pub residual: f64,
    pub iters: usize,
    pub converged: bool,
}

/// Errors from either solver, unified for reporting.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error(transparent)]
    Bisection(#[from] bisection::Error),
    #[error(transparent)]
    Newton(#[from] newton::Error),
}

/// Solves a single request from command-line arguments.
///
/// # Errors
///
/// Returns an error if the inputs fail validation, the solver fails,
/// or the solver gives up before converging.
pub fn run_once(args: &SolveArgs) -> eyre::Result<()> {
    let request = SolveRequest::new(args.equation, args.method, args.a, args.b, args.y)?;
    let outcome = dispatch(&request)?;

    if outcome.converged {
        debug!(
            "converged in {} iterations, residual {:e}",
            outcome.iters, outcome.residual
        );
        println!("Result: {:.6}", outcome.x);
        Ok(())
    } else {
        Err(eyre::eyre!(
            "did not converge within {} iterations; best estimate x = {}",
            outcome.iters,
            outcome.x
        ))
    }
}

/// Runs the interactive prompt loop on stdin/stdout.
///
/// # Errors
///
/// Returns an error only if reading or writing the console fails.
pub fn run_interactive() -> eyre::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run_session(&mut input, &mut output)?;
    Ok(())
}

/// Prints the banner, then collects and solves requests until the user
/// quits or the input ends.
fn run_session(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<()> {
    writeln!(
        output,
        "This program solves equations using the bisection method and Newton's method."
    )?;
    writeln!(output, "1. cos(y/x) - 2*sin(1/x) + (1/x) = 0, [a; b]")?;
    writeln!(output, "2. sin(ln x) - cos(ln x) + y*ln x = 0, [a; b]")?;

    loop {
        let Some(request) = read_request(input, output)? else {
            break;
        };

        match dispatch(&request) {
            Ok(outcome) if outcome.converged => {
                writeln!(output, "Result: {:.6}", outcome.x)?;
            }
            Ok(outcome) => error!(
                "did not converge within {} iterations; best estimate x = {}",
                outcome.iters, outcome.x
            ),
            Err(err) => error!("solve failed: {err}"),
        }

        writeln!(output)?;
        writeln!(output, "Press Enter to continue or type q to quit")?;
        match read_line(input)? {
            Some(line) if line.trim() != "q" => {}
            _ => break,
        }
    }

    Ok(())
}

/// Builds the selected equation and runs the selected solver.
///
/// # Errors
///
/// Returns the underlying solver error unchanged.
pub fn dispatch(request: &SolveRequest) -> Result<Outcome, SolveError> {
    match request.equation {
        EquationKind::Trigonometric => solve_with(&Trigonometric::new(request.y), request),
        EquationKind::Logarithmic => solve_with(&Logarithmic::new(request.y), request),
    }
}

fn solve_with(equation: &impl Equation, request: &SolveRequest) -> Result<Outcome, SolveError> {
    match request.method {
        MethodKind::Bisection => {
            let solution = bisection::solve_unobserved(
                equation,
                [request.a, request.b],
                &bisection::Config::default(),
            )?;
            Ok(Outcome {
                x: solution.x,
                residual: solution.residual,
                iters: solution.iters,
                converged: solution.status == bisection::Status::Converged,
            })
        }
        MethodKind::Newton => {
            let start = 0.5 * (request.a + request.b);
            let solution =
                newton::solve_unobserved(equation, start, &newton::Config::default())?;
            Ok(Outcome {
                x: solution.x,
                residual: solution.residual,
                iters: solution.iters,
                converged: solution.status == newton::Status::Converged,
            })
        }
    }
}

/// Prompts for one complete request, re-asking each stage until its
/// input is valid. Returns `None` when the input ends.
fn read_request(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<Option<SolveRequest>> {
    let equation = loop {
        write!(output, "Choose an equation (1 or 2): ")?;
        output.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match parse_selector(&line).and_then(EquationKind::from_selector) {
            Some(kind) => break kind,
            None => writeln!(output, "Error: Invalid input. Please enter 1 or 2.")?,
        }
    };

    let method = loop {
        write!(output, "Choose a method (1 - Bisection, 2 - Newton): ")?;
        output.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match parse_selector(&line).and_then(MethodKind::from_selector) {
            Some(kind) => break kind,
            None => writeln!(output, "Error: Invalid input. Please enter 1 or 2.")?,
        }
    };

    let (a, b) = loop {
        write!(
            output,
            "Enter the interval [a, b] separated by a space [-100, 100]: "
        )?;
        output.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match parse_pair(&line) {
            Some((a, b)) if validate_interval(a, b).is_ok() => break (a, b),
            _ => writeln!(
                output,
                "Error: Invalid input. Please enter a valid interval [-100, 100] with a < b."
            )?,
        }
    };

    let y = loop {
        write!(
            output,
            "Enter the value of y in the range (-10, 10) excluding 0: "
        )?;
        output.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.trim().parse::<f64>() {
            Ok(y) if validate_parameter(y).is_ok() => break y,
            _ => writeln!(
                output,
                "Error: Invalid input. Please enter a valid value for y in the range (-10, 0) or (0, 10)."
            )?,
        }
    };

    // Each stage validated its own input, so this cannot fail.
    let request = SolveRequest::new(equation, method, a, b, y)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err.to_string()))?;
    Ok(Some(request))
}

fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn parse_selector(line: &str) -> Option<u8> {
    line.trim().parse().ok()
}

/// Parses exactly two whitespace-separated numbers.
fn parse_pair(line: &str) -> Option<(f64, f64)> {
    let mut parts = line.split_whitespace();
    let a = parts.next()?.parse().ok()?;
    let b = parts.next()?.parse().ok()?;
    parts.next().is_none().then_some((a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    use approx::assert_relative_eq;

    fn request_from(script: &str) -> (Option<SolveRequest>, String) {
        let mut input = Cursor::new(script.to_owned());
        let mut output = Vec::new();
        let request = read_request(&mut input, &mut output).expect("console io cannot fail");
        (request, String::from_utf8(output).unwrap())
    }

    #[test]
    fn reads_a_complete_request() {
        let (request, _) = request_from("1\n2\n1 5\n2\n");
        let request = request.expect("should produce a request");

        assert_eq!(request.equation, EquationKind::Trigonometric);
        assert_eq!(request.method, MethodKind::Newton);
        assert_relative_eq!(request.a, 1.0);
        assert_relative_eq!(request.b, 5.0);
        assert_relative_eq!(request.y, 2.0);
    }

    #[test]
    fn reprompts_until_each_stage_is_valid() {
        let script = "5\nx\n1\n2\n0 0\n200 300\n1 5\n0\n11\n2\n";
        let (request, output) = request_from(script);

        assert!(request.is_some());
        assert_eq!(output.matches("Error: Invalid input.").count(), 6);
    }

    #[test]
    fn returns_none_at_end_of_input() {
        let (request, _) = request_from("");
        assert!(request.is_none());

        // Input that ends partway through the stages.
        let (request, _) = request_from("1\n2\n");
        assert!(request.is_none());
    }

    #[test]
    fn dispatches_bisection() {
        let request = SolveRequest::new(
            EquationKind::Logarithmic,
            MethodKind::Bisection,
            1.0,
            3.0,
            1.0,
        )
        .unwrap();

        let outcome = dispatch(&request).expect("should solve");
        assert!(outcome.converged);
        assert_relative_eq!(outcome.x, 1.578_736, epsilon = 1e-4);
    }

    #[test]
    fn dispatches_newton_from_the_bracket_midpoint() {
        let request = SolveRequest::new(
            EquationKind::Trigonometric,
            MethodKind::Newton,
            1.0,
            5.0,
            2.0,
        )
        .unwrap();

        let outcome = dispatch(&request).expect("should solve");
        assert!(outcome.converged);
        assert_relative_eq!(outcome.x, 1.875_617, epsilon = 1e-4);
    }

    #[test]
    fn parses_number_pairs() {
        assert_eq!(parse_pair("1 5"), Some((1.0, 5.0)));
        assert_eq!(parse_pair("  -2.5\t7 "), Some((-2.5, 7.0)));
        assert_eq!(parse_pair("1"), None);
        assert_eq!(parse_pair("1 5 9"), None);
        assert_eq!(parse_pair("one two"), None);
    }
}
