//! Entry point for the `propgen` CLI. It parses arguments, sets up logging,
//! dispatches to the command handler, and maps errors to exit codes.

use log::LevelFilter;
use propgen::cli::Cli;
use propgen::{commands, exit_codes};
use std::process::ExitCode;

/// Info by default; `-v` debug, `-vv` trace. `RUST_LOG` still applies on top.
fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    setup_logging(cli.verbose);

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
