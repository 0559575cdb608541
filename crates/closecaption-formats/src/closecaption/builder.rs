//! Builder for constructing caption containers

use crate::closecaption::block::BlockPacker;
use crate::closecaption::entry::{DirectoryEntry, encode_payload};
use crate::closecaption::error::{CaptionError, Result};
use crate::closecaption::file::CaptionFile;
use crate::closecaption::header::{CaptionHeader, DEFAULT_BLOCK_SIZE, MAX_BLOCK_SIZE};
use closecaption_crypto::{CaptionKeyHasher, KeyHasher};
use tracing::debug;

/// Builder for constructing `CaptionFile` instances
///
/// Captions are kept in insertion order. Keys are hashed and payloads packed
/// into blocks when [`build`](Self::build) runs, so the directory order of the
/// result matches the order captions were added.
pub struct CaptionBuilder<H = CaptionKeyHasher> {
    block_size: u32,
    hasher: H,
    captions: Vec<(String, String)>,
}

impl CaptionBuilder<CaptionKeyHasher> {
    /// Create a new builder with the default hasher and 8192-byte blocks
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(CaptionKeyHasher::new())
    }
}

impl<H: KeyHasher> CaptionBuilder<H> {
    /// Create a builder that hashes keys with `hasher`
    #[must_use]
    pub fn with_hasher(hasher: H) -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            hasher,
            captions: Vec::new(),
        }
    }

    /// Set the block size in bytes (1..=65536)
    #[must_use]
    pub fn block_size(mut self, block_size: u32) -> Self {
        self.block_size = block_size;
        self
    }

    /// Add a caption
    #[must_use]
    pub fn add_caption(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.captions.push((key.into(), text.into()));
        self
    }

    /// Add every caption from an iterator of `(key, text)` pairs
    #[must_use]
    pub fn add_captions<I, K, T>(mut self, captions: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<String>,
    {
        self.captions
            .extend(captions.into_iter().map(|(k, t)| (k.into(), t.into())));
        self
    }

    /// Number of captions added so far
    pub fn len(&self) -> usize {
        self.captions.len()
    }

    /// Whether no captions have been added
    pub fn is_empty(&self) -> bool {
        self.captions.is_empty()
    }

    /// Hash, pack, and assemble the container
    pub fn build(self) -> Result<CaptionFile> {
        if self.block_size == 0 || self.block_size > MAX_BLOCK_SIZE {
            return Err(CaptionError::InvalidBlockSize(i64::from(self.block_size)));
        }

        let mut packer = BlockPacker::new(self.block_size);
        let mut entries = Vec::with_capacity(self.captions.len());

        for (key, text) in &self.captions {
            let hash = self.hasher.hash_key(key)?;
            let placement = packer.place(key, &encode_payload(text))?;
            entries.push(DirectoryEntry::new(
                hash,
                placement.block_index,
                placement.offset,
                placement.length,
            ));
        }

        let blocks = packer.finish();
        let header = CaptionHeader::new(blocks.len() as u32, self.block_size, entries.len() as u32);

        debug!(
            entries = entries.len(),
            blocks = blocks.len(),
            data_offset = header.data_offset,
            "built caption container"
        );

        let file = CaptionFile {
            header,
            entries,
            blocks,
        };
        file.validate()?;

        Ok(file)
    }
}

impl Default for CaptionBuilder<CaptionKeyHasher> {
    fn default() -> Self {
        Self::new()
    }
}
