//! Command-line compiler and inspector for Source engine closed captions.
//!
//! The library half of the `closecaption` tool: configuration parsing, the
//! commands themselves, and output formatting. The binary is a thin wrapper
//! that initializes logging and calls [`run`].
//!
//! # Example
//!
//! ```no_run
//! use closecaption_cli::{CliConfig, run};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = CliConfig::from_args();
//!     config.validate()?;
//!
//!     run(&config, &mut std::io::stdout().lock())?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use commands::{create, open, run};
pub use config::{CliConfig, LogLevel, Mode};
pub use error::{CommandError, ConfigError};
pub use output::OutputFormat;
