// crates/shared-kernel/src/value_objects/target_path.rs
use std::{
    borrow::Cow,
    ops::Deref,
    path::{Path, PathBuf},
};

use crate::error::ArgumentError;

/// Location of the file to stamp. Existence is not checked here; the engine
/// surfaces that as a file access failure.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct TargetPath(PathBuf);

impl TargetPath {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, ArgumentError> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(ArgumentError::Empty { argument: "path" });
        }
        Ok(Self(path))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn to_path_buf(&self) -> PathBuf {
        self.0.clone()
    }

    pub fn display(&self) -> std::path::Display<'_> {
        self.0.display()
    }

    /// Returns a UTF-8 view suitable for logging and UI; non UTF-8 segments are lossy converted.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        self.0.to_string_lossy()
    }
}

impl TryFrom<PathBuf> for TargetPath {
    type Error = ArgumentError;

    fn try_from(path: PathBuf) -> Result<Self, Self::Error> {
        Self::new(path)
    }
}

impl TryFrom<&Path> for TargetPath {
    type Error = ArgumentError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        Self::new(path)
    }
}

impl TryFrom<&str> for TargetPath {
    type Error = ArgumentError;

    fn try_from(path: &str) -> Result<Self, Self::Error> {
        Self::new(path)
    }
}

impl TryFrom<String> for TargetPath {
    type Error = ArgumentError;

    fn try_from(path: String) -> Result<Self, Self::Error> {
        Self::new(path)
    }
}

impl AsRef<Path> for TargetPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Deref for TargetPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
