use thiserror::Error;

/// Malformed token streams, as reported by [`decompress_strict`](crate::decompress_strict).
///
/// `position` fields are byte offsets of the offending record in the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecompressionError {
    #[error("Stream ends with a partial {trailing}-byte record")]
    TruncatedRecord { trailing: usize },

    #[error("Lookback offset {offset} at byte {position} exceeds {available} decoded bytes")]
    InvalidOffset {
        position: usize,
        offset: usize,
        available: usize,
    },

    #[error("Token at byte {position} has only one of offset and length set")]
    InconsistentToken { position: usize },
}

/// Failures reading or writing whole files.
#[cfg(feature = "std")]
#[derive(Error, Debug)]
pub enum FileError {
    #[error("File not found: {}", .path.display())]
    NotFound { path: std::path::PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
