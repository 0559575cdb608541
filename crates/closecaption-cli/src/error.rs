//! Error types for the closed caption command-line tool.
//!
//! All errors use thiserror for consistent error handling across the codebase.

use closecaption_formats::closecaption::CaptionError;
use closecaption_formats::source::SourceError;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Block size outside the range the directory can address
    #[error("Invalid block size {0}: must be between 1 and 65536")]
    InvalidBlockSize(u32),

    /// Caption source file does not exist
    #[error("Caption source not found: {}", .0.display())]
    MissingSource(PathBuf),

    /// Container to inspect does not exist
    #[error("Caption file not found: {}", .0.display())]
    MissingContainer(PathBuf),
}

/// Errors raised while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Container could not be parsed or built
    #[error(transparent)]
    Caption(#[from] CaptionError),

    /// Caption source could not be read
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Lookup key is not present in the container
    #[error("No caption found for key '{0}'")]
    NotFound(String),

    /// JSON output could not be produced
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to read or write a file
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to write command output
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}
