//! Error types for caption key hashing

use thiserror::Error;

/// Errors that can occur while hashing a caption key
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HashError {
    /// Key contains characters outside 7-bit ASCII
    #[error("Caption key is not ASCII: {0:?}")]
    NonAsciiKey(String),
}

/// Result type alias for hashing operations
pub type Result<T> = std::result::Result<T, HashError>;
