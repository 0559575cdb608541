//! Closed caption tool binary entry point.
//!
//! Parses arguments, initializes logging on stderr, validates the
//! configuration, and runs the selected command against stdout.

use anyhow::Result;
use closecaption_cli::{CliConfig, run};
use tracing::Level;

fn main() -> Result<()> {
    let config = CliConfig::from_args();

    // RUST_LOG takes precedence over --log-level
    let level: Level = config.log_level.into();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::default().add_directive(level.into())),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(file = %config.file.display(), mode = ?config.mode(), "starting");

    config.validate()?;

    let stdout = std::io::stdout();
    run(&config, &mut stdout.lock())?;

    Ok(())
}
