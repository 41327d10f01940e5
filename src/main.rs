// src/main.rs
use std::process::ExitCode;

fn main() -> ExitCode {
    set_version_cli::run()
}
