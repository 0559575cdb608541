//! Directory records and resolved captions
//!
//! A directory entry only says where a caption lives. The caption text is
//! recovered by slicing the referenced block, which yields a
//! [`ResolvedCaption`].

use crate::closecaption::error::{CaptionError, Result};
use binrw::{BinRead, BinWrite};
use serde::Serialize;

/// Serialized directory entry size in bytes
pub const DIRECTORY_ENTRY_SIZE: u64 = 12;

/// Bytes taken by the UTF-16 NUL that ends every payload
pub const TERMINATOR_SIZE: usize = 2;

/// One 12-byte directory record
#[derive(BinRead, BinWrite, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[brw(little)]
pub struct DirectoryEntry {
    /// Hash of the caption key
    pub hash: u32,
    /// Index of the block holding the payload
    pub block_index: i32,
    /// Byte offset of the payload within its block
    pub offset: u16,
    /// Payload length in bytes, terminator included
    pub length: u16,
}

impl DirectoryEntry {
    /// Create a new directory entry
    pub fn new(hash: u32, block_index: i32, offset: u16, length: u16) -> Self {
        Self {
            hash,
            block_index,
            offset,
            length,
        }
    }

    /// Byte range of the payload within its block
    pub fn byte_range(&self) -> std::ops::Range<usize> {
        let start = usize::from(self.offset);
        start..start + usize::from(self.length)
    }

    /// Check that the entry fits the container geometry
    pub fn validate(&self, block_count: usize, block_size: u32) -> Result<()> {
        if self.block_index < 0 || self.block_index as usize >= block_count {
            return Err(CaptionError::BlockIndexOutOfRange {
                hash: self.hash,
                block_index: self.block_index,
                block_count,
            });
        }

        if u32::from(self.offset) + u32::from(self.length) > block_size {
            return Err(CaptionError::EntryOutOfBounds {
                hash: self.hash,
                offset: self.offset,
                length: self.length,
                block_size,
            });
        }

        if usize::from(self.length) < TERMINATOR_SIZE || self.length % 2 != 0 {
            return Err(CaptionError::InvalidPayloadLength {
                hash: self.hash,
                length: self.length,
            });
        }

        Ok(())
    }

    /// Decode this entry's text from its block
    pub fn resolve(&self, blocks: &[Vec<u8>]) -> Result<ResolvedCaption> {
        let block = usize::try_from(self.block_index)
            .ok()
            .and_then(|index| blocks.get(index))
            .ok_or(CaptionError::BlockIndexOutOfRange {
                hash: self.hash,
                block_index: self.block_index,
                block_count: blocks.len(),
            })?;

        let payload = block
            .get(self.byte_range())
            .ok_or(CaptionError::EntryOutOfBounds {
                hash: self.hash,
                offset: self.offset,
                length: self.length,
                block_size: block.len() as u32,
            })?;

        let text =
            decode_payload(payload).ok_or(CaptionError::InvalidText { hash: self.hash })?;

        Ok(ResolvedCaption { entry: *self, text })
    }
}

/// A directory entry together with its decoded text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedCaption {
    /// Persisted directory record
    #[serde(flatten)]
    pub entry: DirectoryEntry,
    /// Caption text without the terminator
    pub text: String,
}

impl ResolvedCaption {
    /// Hash of the caption key
    pub fn hash(&self) -> u32 {
        self.entry.hash
    }
}

/// Encode caption text as UTF-16LE followed by a NUL terminator
pub fn encode_payload(text: &str) -> Vec<u8> {
    let mut payload = Vec::with_capacity(text.len() * 2 + TERMINATOR_SIZE);
    for unit in text.encode_utf16() {
        payload.extend_from_slice(&unit.to_le_bytes());
    }
    payload.extend_from_slice(&[0, 0]);
    payload
}

/// Decode a UTF-16LE payload, dropping the trailing NUL terminator
///
/// Returns `None` for odd-length input or unpaired surrogates.
pub fn decode_payload(payload: &[u8]) -> Option<String> {
    if payload.len() % 2 != 0 {
        return None;
    }

    let mut units: Vec<u16> = payload
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    if units.last() == Some(&0) {
        units.pop();
    }

    String::from_utf16(&units).ok()
}
