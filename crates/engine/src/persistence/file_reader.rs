use std::{fs::File, io::Read, path::Path};

use crate::error::FileAccessError;

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Read the entire file into memory as raw bytes.
    ///
    /// A directory opens fine on some platforms and only fails on read, so
    /// both steps map to the same error.
    pub fn read_all(path: &Path) -> Result<Vec<u8>, FileAccessError> {
        let mut file = File::open(path).map_err(|e| FileAccessError::read(path, e))?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf)
            .map_err(|e| FileAccessError::read(path, e))?;
        Ok(buf)
    }
}
