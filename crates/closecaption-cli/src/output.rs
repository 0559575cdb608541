//! Output formatting for container summaries and caption listings
//!
//! Text output is meant for terminals; JSON output carries the same fields
//! for scripting.

use closecaption_formats::closecaption::{CaptionFile, CaptionHeader, ResolvedCaption};
use serde::Serialize;
use std::io::Write;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    Text,
    /// JSON output
    Json,
}

/// Header fields as reported to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderSummary {
    /// Format version
    pub version: i32,
    /// Number of data blocks
    pub block_count: i32,
    /// Size of every block in bytes
    pub block_size: i32,
    /// Number of directory entries
    pub directory_count: i32,
    /// Byte offset of the first block
    pub data_offset: i32,
}

impl From<&CaptionHeader> for HeaderSummary {
    fn from(header: &CaptionHeader) -> Self {
        Self {
            version: header.version,
            block_count: header.block_count,
            block_size: header.block_size,
            directory_count: header.directory_count,
            data_offset: header.data_offset,
        }
    }
}

/// A container listing: header plus, for `--dir`, every caption
#[derive(Debug, Clone, Serialize)]
pub struct ContainerListing<'a> {
    /// Header fields
    pub header: HeaderSummary,
    /// Captions sorted by hash
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captions: Option<&'a [ResolvedCaption]>,
}

/// Write the header summary, followed by the captions when given.
///
/// # Errors
///
/// Returns an error if the writer fails or JSON serialization fails.
pub fn write_listing<W: Write>(
    out: &mut W,
    format: OutputFormat,
    file: &CaptionFile,
    captions: Option<&[ResolvedCaption]>,
) -> Result<(), crate::CommandError> {
    let listing = ContainerListing {
        header: HeaderSummary::from(&file.header),
        captions,
    };

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &listing)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            write_header_text(out, &listing.header)?;
            if let Some(captions) = captions {
                writeln!(out)?;
                for caption in captions {
                    write_caption_line(out, caption)?;
                }
            }
        }
    }
    Ok(())
}

/// Write a single caption.
///
/// # Errors
///
/// Returns an error if the writer fails or JSON serialization fails.
pub fn write_caption<W: Write>(
    out: &mut W,
    format: OutputFormat,
    caption: &ResolvedCaption,
) -> Result<(), crate::CommandError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, caption)?;
            writeln!(out)?;
        }
        OutputFormat::Text => writeln!(out, "{}", caption.text)?,
    }
    Ok(())
}

fn write_header_text<W: Write>(out: &mut W, header: &HeaderSummary) -> std::io::Result<()> {
    writeln!(out, "Version:         {}", header.version)?;
    writeln!(out, "Blocks:          {}", header.block_count)?;
    writeln!(out, "Block size:      {}", header.block_size)?;
    writeln!(out, "Directory size:  {}", header.directory_count)?;
    writeln!(out, "Data offset:     {}", header.data_offset)
}

fn write_caption_line<W: Write>(out: &mut W, caption: &ResolvedCaption) -> std::io::Result<()> {
    let entry = &caption.entry;
    writeln!(
        out,
        "{:08x}  block {:>4}  offset {:>5}  length {:>5}  {}",
        entry.hash, entry.block_index, entry.offset, entry.length, caption.text
    )
}
