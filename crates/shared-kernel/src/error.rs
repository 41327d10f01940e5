// crates/shared-kernel/src/error.rs
use std::{fmt, path::PathBuf};

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum StampError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<StampError>,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),

    #[error(transparent)]
    FileAccess(#[from] FileAccessError),

    #[error("Output error: {0}")]
    Output(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StampError>;

impl StampError {
    /// True when the failure was caused by caller input rather than the filesystem.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Self::Context { source, .. } => source.is_invalid_argument(),
            Self::InvalidArgument(_) => true,
            Self::FileAccess(_) | Self::Output(_) => false,
        }
    }

    /// Walks through any context layers to the underlying file access failure.
    pub fn as_file_access(&self) -> Option<&FileAccessError> {
        match self {
            Self::Context { source, .. } => source.as_file_access(),
            Self::FileAccess(err) => Some(err),
            Self::InvalidArgument(_) | Self::Output(_) => None,
        }
    }
}

/// Rejected caller input. Always raised before any file I/O.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("{argument} must not be empty")]
    Empty { argument: &'static str },

    #[error("{argument} is required")]
    Missing { argument: String },
}

/// Which half of the read-transform-write cycle failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    Read,
    Write,
}

impl fmt::Display for FileOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Read => "read",
            Self::Write => "write",
        })
    }
}

#[derive(Debug, Error)]
#[error("Failed to {operation} file '{path}': {source}")]
pub struct FileAccessError {
    pub operation: FileOperation,
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

impl FileAccessError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self { operation: FileOperation::Read, path: path.into(), source }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self { operation: FileOperation::Write, path: path.into(), source }
    }

    pub fn kind(&self) -> std::io::ErrorKind {
        self.source.kind()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<StampError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| StampError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| StampError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
