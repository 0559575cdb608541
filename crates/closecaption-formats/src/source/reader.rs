//! Line-oriented caption source reader

use crate::source::error::{Result, SourceError};
use regex::Regex;
use std::path::Path;
use tracing::debug;

/// Matches `"KEY"` followed by whitespace and `"TEXT"` at the start of a line
const CAPTION_LINE_PATTERN: &str = r#"^\s*"([^"]+)"\s+"([^"]+)""#;

/// Key naming the language of the whole file, not a caption
pub const LANGUAGE_KEY: &str = "Language";

/// Prefix marking English reference lines in translated files
pub const ENGLISH_PREFIX: &str = "[english]";

/// One `(key, text)` pair read from a caption source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionPair {
    /// Caption key, as written in the source
    pub key: String,
    /// Caption text, including any inline markup tags
    pub text: String,
}

impl CaptionPair {
    /// Split into `(key, text)`
    pub fn into_parts(self) -> (String, String) {
        (self.key, self.text)
    }

    /// Whether this pair is a caption rather than file metadata
    pub fn is_caption(&self) -> bool {
        self.key != LANGUAGE_KEY && !self.key.starts_with(ENGLISH_PREFIX)
    }
}

/// Decoded caption source text
///
/// Lines that do not look like `"KEY" "TEXT"` are skipped without error, as are
/// the `Language` line and `[english]` reference lines.
#[derive(Debug, Clone)]
pub struct CaptionSource {
    text: String,
    pattern: Regex,
}

impl CaptionSource {
    /// Wrap already decoded source text
    pub fn new(text: impl Into<String>) -> Result<Self> {
        Ok(Self {
            text: text.into(),
            pattern: Regex::new(CAPTION_LINE_PATTERN)?,
        })
    }

    /// Decode UTF-16LE bytes, dropping a leading byte order mark
    pub fn from_utf16le(bytes: &[u8]) -> Result<Self> {
        if bytes.len() % 2 != 0 {
            return Err(SourceError::OddLength(bytes.len()));
        }

        let mut units: Vec<u16> = bytes
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        if units.first() == Some(&0xFEFF) {
            units.remove(0);
        }

        Self::new(String::from_utf16(&units)?)
    }

    /// Read and decode a UTF-16LE caption source file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        debug!(path = %path.display(), bytes = bytes.len(), "read caption source");
        Self::from_utf16le(&bytes)
    }

    /// Decoded source text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Every line matching the caption pattern, metadata lines included
    pub fn pairs(&self) -> impl Iterator<Item = CaptionPair> + '_ {
        self.text.split('\n').filter_map(|line| {
            let captures = self.pattern.captures(line)?;
            Some(CaptionPair {
                key: captures[1].to_string(),
                text: captures[2].to_string(),
            })
        })
    }

    /// Caption pairs in source order, metadata lines excluded
    pub fn captions(&self) -> impl Iterator<Item = CaptionPair> + '_ {
        self.pairs().filter(CaptionPair::is_caption)
    }
}
