use set_version_shared_kernel::{Result, StampValue, TargetPath};

use crate::stamper::StampOutcome;

/// Receives notices about a stamping run. Called synchronously from `stamp`.
pub trait StampObserver: Send + Sync {
    /// Called once before the target file is touched.
    fn on_stamp(&self, path: &TargetPath, value: &StampValue) -> Result<()>;

    fn on_complete(&self, _outcome: &StampOutcome) -> Result<()> {
        Ok(())
    }
}

/// Observer that reports nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl StampObserver for NoopObserver {
    fn on_stamp(&self, _path: &TargetPath, _value: &StampValue) -> Result<()> {
        Ok(())
    }
}
