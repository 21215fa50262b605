//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `tld_check` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output and the process exit status
//!
//! All core functionality is implemented in the library crate.

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use std::process;

use tld_check::config::EXIT_ERROR;
use tld_check::initialization::init_logger_with;
use tld_check::{program_name, run_check, usage_text, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = parse_config();

    if let Err(e) = init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")
    {
        eprintln!("tld_check error: {:#}", e);
        process::exit(EXIT_ERROR);
    }
    log::debug!("Configuration: {:?}", config);

    match run_check(&config).await {
        Ok(outcome) => {
            println!("{outcome}");
            process::exit(outcome.exit_code());
        }
        Err(e) => {
            log::debug!("Check failed: {:?}", e);
            eprintln!("{e}");
            process::exit(e.exit_code());
        }
    }
}

/// Parses the command line, printing usage and exiting on anything but exactly one TLD.
fn parse_config() -> Config {
    let e = match Config::try_parse() {
        Ok(config) => return config,
        Err(e) => e,
    };

    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        ErrorKind::MissingRequiredArgument
        | ErrorKind::UnknownArgument
        | ErrorKind::TooManyValues => {}
        // Bad flag values: show clap's explanation as well
        _ => eprint!("{e}"),
    }

    let program = program_name(std::env::args_os().next().as_deref());
    print!("{}", usage_text(&program));
    process::exit(EXIT_ERROR);
}
