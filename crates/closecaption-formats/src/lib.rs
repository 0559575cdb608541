//! File format parsers and builders for Source engine closed captions
//!
#![allow(clippy::cast_possible_truncation)] // Intentional for binary format parsing
#![allow(clippy::cast_possible_wrap)] // Header fields are signed on disk
#![allow(clippy::cast_lossless)] // Sometimes clearer than From
#![allow(clippy::doc_markdown)] // Format names don't need backticks
#![allow(clippy::module_name_repetitions)] // Clear naming is preferred
#![allow(clippy::return_self_not_must_use)] // Builder patterns
//! This crate provides a symmetric parser and builder for compiled closed
//! caption containers (`closecaption_<language>.dat`) and a reader for the
//! UTF-16LE caption source text they are compiled from.
//!
//! # Supported Formats
//!
//! - **Caption container**: `VCCD` header, hashed directory, fixed-size
//!   UTF-16LE text blocks
//! - **Caption source**: line-oriented `"KEY" "TEXT"` text
//!
//! # Design Principles
//!
//! - **Symmetric Operations**: Both parsing and building supported
//! - **Type Safety**: Persisted directory records and resolved captions are
//!   distinct types
//! - **Round-Trip Guarantee**: parse(build(data)) == data

#![warn(missing_docs)]

/// Compiled closed caption container format
pub mod closecaption;
/// Caption source text reader
pub mod source;

/// Common format trait for binary caption formats
pub trait CaptionFormat: Sized {
    /// Parse from bytes
    fn parse(data: &[u8]) -> Result<Self, Box<dyn std::error::Error>>;

    /// Build to bytes
    fn build(&self) -> Result<Vec<u8>, Box<dyn std::error::Error>>;

    /// Verify round-trip correctness
    fn verify_round_trip(data: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
        let parsed = Self::parse(data)?;
        let rebuilt = parsed.build()?;
        if data != rebuilt.as_slice() {
            return Err("Round-trip verification failed".into());
        }
        Ok(())
    }
}
