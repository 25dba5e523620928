use clap::{Args, Parser, Subcommand};

use crate::request::{EquationKind, MethodKind};

/// Solves one of two fixed nonlinear equations over an interval.
///
/// Without a subcommand the program runs an interactive session that
/// prompts for each input and loops until the user quits.
#[derive(Debug, Parser)]
#[command(name = "rootfind", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Solve once with the given inputs and exit.
    Solve(SolveArgs),
}

#[derive(Debug, Args)]
pub struct SolveArgs {
    /// Equation to solve.
    #[arg(long, value_enum)]
    pub equation: EquationKind,

    /// Root-finding method.
    #[arg(long, value_enum)]
    pub method: MethodKind,

    /// Left interval endpoint, within [-100, 100].
    #[arg(short, long, allow_negative_numbers = true)]
    pub a: f64,

    /// Right interval endpoint, within [-100, 100].
    #[arg(short, long, allow_negative_numbers = true)]
    pub b: f64,

    /// Equation parameter, within (-10, 10) and nonzero.
    #[arg(short, long, allow_negative_numbers = true)]
    pub y: f64,
}
