//! Whole-file byte sources and sinks.

use std::path::Path;

use crate::error::FileError;

type Result<T> = core::result::Result<T, FileError>;

/// Reads the entire file at `path`.
///
/// A missing file is reported as [`FileError::NotFound`] rather than a bare
/// I/O error.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    match std::fs::read(path) {
        Ok(data) => Ok(data),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(FileError::NotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(e.into()),
    }
}

/// Writes `data` to `path`, replacing any existing file.
pub fn write_file(path: impl AsRef<Path>, data: &[u8]) -> Result<()> {
    std::fs::write(path, data)?;
    Ok(())
}
