use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::error::FileAccessError;

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Truncate `path` and write `data` in full.
    ///
    /// Not atomic: a failure part way through leaves a partially written file.
    pub fn write_all(path: &Path, data: &[u8]) -> Result<(), FileAccessError> {
        let file = File::create(path).map_err(|e| FileAccessError::write(path, e))?;
        let mut w = BufWriter::new(file);
        w.write_all(data)
            .and_then(|()| w.flush())
            .map_err(|e| FileAccessError::write(path, e))
    }
}
