//! Command-line entry point for plate number generation.

use std::{io, process::ExitCode};

use clap::{CommandFactory as _, FromArgMatches as _};
use platesum_app::{cli::Cli, version};

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let matches = Cli::command()
        .long_version(version::build_version())
        .get_matches();
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(err) => err.exit(),
    };

    log::debug!("starting platesum, version={}", version::build_version());
    match platesum_app::run(&cli, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("command failed: {err:?}");
            eprintln!("error: {err}");
            err.exit_code()
        }
    }
}
