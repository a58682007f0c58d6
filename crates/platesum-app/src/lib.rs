//! Command-line front end for plate number generation.
//!
//! The binary parses arguments with [`cli::Cli`], validates user input at this
//! boundary, and hands plain values to [`platesum_core`] and
//! [`platesum_generator`]. Results are rendered by [`report`].

pub mod cli;
pub mod command;
pub mod error;
pub mod report;
pub mod version;

use std::io::Write;

pub use self::error::AppError;
use self::cli::{Cli, Command};

/// Runs the selected subcommand, writing its report to `out`.
///
/// # Errors
///
/// Returns [`AppError`] for invalid user input and for output failures.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<(), AppError> {
    match &cli.command {
        Command::Generate(args) => command::generate(args, out),
        Command::Sum(args) => command::sum(args, out),
        Command::Check(args) => command::check(args, out),
        Command::Defaults(args) => command::defaults(args, out),
    }
}
