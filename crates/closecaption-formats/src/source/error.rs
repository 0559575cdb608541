//! Error types for caption source text reading

use thiserror::Error;

/// Errors that can occur while reading caption source text
#[derive(Debug, Error)]
pub enum SourceError {
    /// UTF-16LE input has an odd number of bytes
    #[error("Source text has odd byte length {0}, expected UTF-16LE")]
    OddLength(usize),

    /// UTF-16LE input contains an unpaired surrogate
    #[error("Source text is not valid UTF-16LE: {0}")]
    InvalidUtf16(#[from] std::string::FromUtf16Error),

    /// Caption line pattern failed to compile
    #[error("Caption line pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for source reading operations
pub type Result<T> = std::result::Result<T, SourceError>;
