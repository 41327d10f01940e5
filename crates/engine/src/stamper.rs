//! The read-replace-write cycle behind `set_version`.
//!
//! Content is read once, transformed once in memory and written once. A read
//! failure aborts before anything is written.

use std::path::Path;

use log::{debug, info, trace};
use set_version_shared_kernel::{ErrorContext, StampValue, TargetPath, VERSION_PLACEHOLDER};

use crate::config::{StampConfig, StampConfigBuilder};
use crate::error::Result;
use crate::persistence::{FileReader, FileWriter};
use crate::progress::StampObserver;
use crate::replace::{count_literal, replace_literal};

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampOutcome {
    pub path: TargetPath,
    pub value: StampValue,
    /// Number of sentinel occurrences rewritten; zero means the file was
    /// written back unchanged.
    pub replacements: usize,
}

impl StampOutcome {
    pub fn is_noop(&self) -> bool {
        self.replacements == 0
    }
}

/// Replace every `version = "unset"` in the configured file with
/// `version = "<value>"` and write the file back in place.
///
/// # Errors
///
/// Returns a file access error if the file cannot be read or written, or
/// whatever the observer reports.
pub fn stamp(config: &StampConfig, observer: &dyn StampObserver) -> Result<StampOutcome> {
    let sentinel = VERSION_PLACEHOLDER.sentinel();
    let target = VERSION_PLACEHOLDER.instantiate(config.value.as_str());

    observer.on_stamp(&config.path, &config.value)?;

    trace!("reading {}", config.path.display());
    let content = FileReader::read_all(config.path.as_path())
        .with_context(|| format!("stamping {} with {}", config.path.display(), config.value))?;

    let (stamped, replacements) =
        replace_literal(&content, sentinel.as_bytes(), target.as_bytes());

    if replacements == 0 {
        let already = count_literal(&content, target.as_bytes());
        if already > 0 {
            info!(
                "{} has no `{sentinel}` but already carries `{target}` {already} time(s); leaving it as is",
                config.path.display()
            );
        } else {
            debug!("no `{sentinel}` found in {}", config.path.display());
        }
    }

    trace!("writing {} bytes to {}", stamped.len(), config.path.display());
    FileWriter::write_all(config.path.as_path(), &stamped)
        .with_context(|| format!("stamping {} with {}", config.path.display(), config.value))?;
    debug!(
        "stamped {replacements} occurrence(s) of `{sentinel}` in {}",
        config.path.display()
    );

    let outcome = StampOutcome {
        path: config.path.clone(),
        value: config.value.clone(),
        replacements,
    };
    observer.on_complete(&outcome)?;
    Ok(outcome)
}

/// Validate raw inputs and run [`stamp`].
///
/// # Errors
///
/// Returns an invalid argument error, before touching the filesystem, when
/// `value` or `path` is empty. Otherwise as [`stamp`].
pub fn stamp_file(
    value: &str,
    path: impl AsRef<Path>,
    observer: &dyn StampObserver,
) -> Result<StampOutcome> {
    let config = StampConfigBuilder::default()
        .value(StampValue::new(value)?)
        .path(TargetPath::new(path.as_ref())?)
        .build()?;
    stamp(&config, observer)
}
