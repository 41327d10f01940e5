// crates/cli/src/error.rs
use std::process::ExitCode;

use thiserror::Error;

/// Exit status for rejected arguments and for failed runs.
pub const FAILURE_STATUS: u8 = 1;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Stamp(#[from] set_version_engine::StampError),
}

impl AppError {
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Stamp(err) if err.is_invalid_argument())
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(FAILURE_STATUS)
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
