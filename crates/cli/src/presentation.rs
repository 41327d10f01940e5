// crates/cli/src/presentation.rs
use std::io::{self, Write};

use clap::CommandFactory;
use set_version_engine::{StampObserver, StampOutcome};
use set_version_shared_kernel::{Result, StampError, StampValue, TargetPath};

use crate::args::Args;

pub fn notice(path: &TargetPath, value: &StampValue) -> String {
    format!("supplying file {} with {value} tag...", path.display())
}

/// Prints the progress notice to stdout before the file is touched.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutNotice;

impl StampObserver for StdoutNotice {
    fn on_stamp(&self, path: &TargetPath, value: &StampValue) -> Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", notice(path, value))
            .and_then(|()| out.flush())
            .map_err(StampError::Output)
    }

    fn on_complete(&self, outcome: &StampOutcome) -> Result<()> {
        log::info!(
            "{} occurrence(s) stamped in {}",
            outcome.replacements,
            outcome.path.display()
        );
        Ok(())
    }
}

pub fn write_usage(out: &mut impl Write) -> io::Result<()> {
    let usage = Args::command().render_usage();
    writeln!(out, "{usage}")?;
    out.flush()
}

pub fn write_error(out: &mut impl Write, err: &dyn std::error::Error) -> io::Result<()> {
    writeln!(out, "Error: {err}")?;
    out.flush()
}

/// A closed stdout is ignored; the exit status still reports the failure.
pub fn print_usage() {
    let _ = write_usage(&mut io::stdout().lock());
}

pub fn print_error(err: &dyn std::error::Error) {
    let _ = write_error(&mut io::stderr().lock(), err);
}
