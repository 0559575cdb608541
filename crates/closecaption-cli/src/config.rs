//! Command-line configuration.
//!
//! Configuration comes from CLI arguments with environment variable fallbacks
//! (`CLOSECAPTION_BLOCK_SIZE`, `CLOSECAPTION_FORMAT`) and defaults, and is
//! checked by [`CliConfig::validate`] before any file is touched.
//!
//! # Example
//!
//! ```no_run
//! use closecaption_cli::CliConfig;
//!
//! let config = CliConfig::from_args();
//! config.validate().expect("Invalid configuration");
//!
//! println!("Container: {}", config.file.display());
//! ```

use crate::error::ConfigError;
use crate::output::OutputFormat;
use clap::Parser;
use closecaption_formats::closecaption::{DEFAULT_BLOCK_SIZE, MAX_BLOCK_SIZE};
use std::path::PathBuf;
use tracing::Level;

/// Command-line configuration for the caption tool.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "closecaption",
    about = "Read and write Source engine closed caption .dat files",
    version
)]
pub struct CliConfig {
    /// Print the caption directory, sorted by key hash
    #[arg(short, long)]
    pub dir: bool,

    /// Create the caption file from a UTF-16LE caption source text file
    #[arg(short, long, value_name = "SOURCE", conflicts_with_all = ["dir", "lookup"])]
    pub create: Option<PathBuf>,

    /// Print the caption stored under a key
    #[arg(short, long, value_name = "KEY")]
    pub lookup: Option<String>,

    /// Output format
    #[arg(
        short = 'o',
        long,
        value_enum,
        env = "CLOSECAPTION_FORMAT",
        default_value = "text"
    )]
    pub format: OutputFormat,

    /// Block size in bytes for newly created files
    #[arg(long, env = "CLOSECAPTION_BLOCK_SIZE", default_value_t = DEFAULT_BLOCK_SIZE)]
    pub block_size: u32,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Caption file to read, or to write with `--create`
    pub file: PathBuf,
}

/// What the tool has been asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Compile a caption source into the container
    Create {
        /// Caption source text file
        source: PathBuf,
    },
    /// Print the header and the directory
    Directory,
    /// Print a single caption
    Lookup {
        /// Caption key to look up
        key: String,
    },
    /// Print the header only
    Summary,
}

/// Logging verbosity.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Everything, including per-block packing
    Trace,
    /// Build and parse summaries
    Debug,
    /// Progress messages
    Info,
    /// Warnings only
    Warn,
    /// Errors only
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl CliConfig {
    /// Parse configuration from command-line arguments.
    #[must_use]
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// The requested mode. `--create` wins, then `--lookup`, then `--dir`.
    #[must_use]
    pub fn mode(&self) -> Mode {
        if let Some(source) = &self.create {
            Mode::Create {
                source: source.clone(),
            }
        } else if let Some(key) = &self.lookup {
            Mode::Lookup { key: key.clone() }
        } else if self.dir {
            Mode::Directory
        } else {
            Mode::Summary
        }
    }

    /// Validate configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - The block size is outside 1..=65536
    /// - The caption source for `--create` doesn't exist
    /// - The caption file to read doesn't exist
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.block_size == 0 || self.block_size > MAX_BLOCK_SIZE {
            return Err(ConfigError::InvalidBlockSize(self.block_size));
        }

        match self.mode() {
            Mode::Create { source } => {
                if !source.exists() {
                    return Err(ConfigError::MissingSource(source));
                }
            }
            Mode::Directory | Mode::Lookup { .. } | Mode::Summary => {
                if !self.file.exists() {
                    return Err(ConfigError::MissingContainer(self.file.clone()));
                }
            }
        }

        Ok(())
    }
}
