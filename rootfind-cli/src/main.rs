mod args;
mod request;
mod session;

use clap::Parser;

use crate::args::{Cli, Command};

fn main() -> eyre::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Some(Command::Solve(args)) => session::run_once(&args),
        None => session::run_interactive(),
    }
}
