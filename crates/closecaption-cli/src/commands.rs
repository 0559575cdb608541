//! Command implementations
//!
//! Commands write their results to any [`Write`] so they can be exercised
//! without a terminal.

use crate::config::{CliConfig, Mode};
use crate::error::CommandError;
use crate::output::{self, OutputFormat};
use closecaption_crypto::CaptionKeyHasher;
use closecaption_formats::closecaption::{CaptionBuilder, CaptionFile};
use closecaption_formats::source::{CaptionPair, CaptionSource};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Run the command selected by `config`, writing results to `out`.
///
/// # Errors
///
/// Returns an error if any file cannot be read or written, the source or
/// container is malformed, or a looked-up key is missing.
pub fn run<W: Write>(config: &CliConfig, out: &mut W) -> Result<(), CommandError> {
    match config.mode() {
        Mode::Create { source } => {
            let file = create(&source, &config.file, config.block_size)?;
            output::write_listing(out, config.format, &file, None)
        }
        Mode::Directory => {
            let file = open(&config.file)?;
            let captions = file.sorted_by_hash()?;
            output::write_listing(out, config.format, &file, Some(&captions))
        }
        Mode::Lookup { key } => {
            let file = open(&config.file)?;
            lookup(&file, &key, config.format, out)
        }
        Mode::Summary => {
            let file = open(&config.file)?;
            output::write_listing(out, config.format, &file, None)
        }
    }
}

/// Compile the caption source at `source` into a container at `target`.
///
/// # Errors
///
/// Returns an error if the source cannot be read, a caption cannot be packed,
/// or the container cannot be written.
pub fn create(source: &Path, target: &Path, block_size: u32) -> Result<CaptionFile, CommandError> {
    let captions = CaptionSource::from_path(source)?;
    let file = CaptionBuilder::new()
        .block_size(block_size)
        .add_captions(captions.captions().map(CaptionPair::into_parts))
        .build()?;

    let io_error = |source| CommandError::Io {
        path: target.to_path_buf(),
        source,
    };
    let mut writer = BufWriter::new(File::create(target).map_err(io_error)?);
    file.write_to(&mut writer)?;
    writer.flush().map_err(io_error)?;

    info!(
        path = %target.display(),
        captions = file.len(),
        blocks = file.header.block_count,
        "wrote caption file"
    );
    Ok(file)
}

/// Read and parse the container at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid container.
pub fn open(path: &Path) -> Result<CaptionFile, CommandError> {
    let data = std::fs::read(path).map_err(|source| CommandError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = data.len(), "read caption file");
    Ok(CaptionFile::parse(&data)?)
}

fn lookup<W: Write>(
    file: &CaptionFile,
    key: &str,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CommandError> {
    let caption = file
        .lookup(key, &CaptionKeyHasher::new())?
        .ok_or_else(|| CommandError::NotFound(key.to_string()))?;
    output::write_caption(out, format, &caption)
}
