// crates/cli/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod presentation;

use std::process::ExitCode;

use clap::Parser;
use set_version_engine::{StampOutcome, stamp};

use crate::args::Args;
use crate::config::StampConfig;
use crate::error::Result;
use crate::presentation::StdoutNotice;

/// Parse the process arguments and run.
pub fn run() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);
    run_with(&args)
}

/// Run with already parsed arguments, mapping failures to an exit status.
pub fn run_with(args: &Args) -> ExitCode {
    match execute(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) if err.is_usage() => {
            log::debug!("rejected arguments: {err}");
            presentation::print_usage();
            err.exit_code()
        }
        Err(err) => {
            presentation::print_error(&err);
            err.exit_code()
        }
    }
}

/// Validate arguments into a config and stamp the file.
///
/// # Errors
///
/// Returns an error wrapping invalid arguments, file access failures, or a
/// failure writing the notice.
pub fn execute(args: &Args) -> Result<StampOutcome> {
    let config = StampConfig::try_from(args)?;
    Ok(stamp(&config, &StdoutNotice)?)
}
