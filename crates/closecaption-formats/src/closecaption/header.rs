//! Fixed 24-byte container header
//!
//! ```text
//! offset  field            type
//! 0       magic            i32  ("VCCD")
//! 4       version          i32
//! 8       block_count      i32
//! 12      block_size       i32
//! 16      directory_count  i32
//! 20      data_offset      i32
//! ```
//!
//! All fields are little-endian.

use crate::closecaption::entry::DIRECTORY_ENTRY_SIZE;
use crate::closecaption::error::{CaptionError, Result};
use binrw::{BinRead, BinWrite};

/// `VCCD` read as a little-endian i32 (1145258838)
pub const CAPTION_MAGIC: i32 = 0x4443_4356;

/// Only container version understood by the engine
pub const CAPTION_VERSION: i32 = 1;

/// Default payload block capacity in bytes
pub const DEFAULT_BLOCK_SIZE: u32 = 8192;

/// Largest block size whose offsets still fit in a u16 directory field
pub const MAX_BLOCK_SIZE: u32 = 65536;

/// Granularity of the data region start and the total file length
pub const DATA_ALIGNMENT: u64 = 512;

/// Serialized header size in bytes
pub const HEADER_SIZE: u64 = 24;

/// Round `value` up to the next multiple of `align`
pub const fn align_up(value: u64, align: u64) -> u64 {
    value.div_ceil(align) * align
}

/// Offset of the block region for a directory with `directory_count` entries
pub const fn data_offset_for(directory_count: u64) -> u64 {
    align_up(
        HEADER_SIZE + directory_count * DIRECTORY_ENTRY_SIZE,
        DATA_ALIGNMENT,
    )
}

/// Caption container header
#[derive(BinRead, BinWrite, Debug, Clone, Copy, PartialEq, Eq)]
#[brw(little)]
pub struct CaptionHeader {
    /// Magic value, `CAPTION_MAGIC` for valid containers
    pub magic: i32,
    /// Format version
    pub version: i32,
    /// Number of payload blocks
    pub block_count: i32,
    /// Size of every block in bytes
    pub block_size: i32,
    /// Number of directory entries
    pub directory_count: i32,
    /// Absolute offset of the first block
    pub data_offset: i32,
}

impl CaptionHeader {
    /// Create a header for the given layout, computing the aligned data offset
    pub fn new(block_count: u32, block_size: u32, directory_count: u32) -> Self {
        Self {
            magic: CAPTION_MAGIC,
            version: CAPTION_VERSION,
            block_count: block_count as i32,
            block_size: block_size as i32,
            directory_count: directory_count as i32,
            data_offset: data_offset_for(u64::from(directory_count)) as i32,
        }
    }

    /// Number of blocks as an unsigned count
    pub fn block_count(&self) -> usize {
        self.block_count.max(0) as usize
    }

    /// Block size in bytes
    pub fn block_size(&self) -> u32 {
        self.block_size.max(0) as u32
    }

    /// Number of directory entries as an unsigned count
    pub fn directory_count(&self) -> usize {
        self.directory_count.max(0) as usize
    }

    /// Data region offset in bytes
    pub fn data_offset(&self) -> u64 {
        self.data_offset.max(0) as u64
    }

    /// First byte after the directory table
    pub fn directory_end(&self) -> u64 {
        HEADER_SIZE + self.directory_count() as u64 * DIRECTORY_ENTRY_SIZE
    }

    /// First byte after the block region
    pub fn data_end(&self) -> u64 {
        self.data_offset() + self.block_count() as u64 * u64::from(self.block_size())
    }

    /// Total file length including trailing alignment padding
    pub fn file_size(&self) -> u64 {
        align_up(self.data_end(), DATA_ALIGNMENT)
    }

    /// Validate header fields
    pub fn validate(&self) -> Result<()> {
        if self.magic != CAPTION_MAGIC {
            return Err(CaptionError::InvalidMagic(self.magic));
        }

        if self.version != CAPTION_VERSION {
            return Err(CaptionError::UnsupportedVersion(self.version));
        }

        if self.block_size <= 0 || self.block_size as u32 > MAX_BLOCK_SIZE {
            return Err(CaptionError::InvalidBlockSize(i64::from(self.block_size)));
        }

        for (field, value) in [
            ("block_count", self.block_count),
            ("directory_count", self.directory_count),
            ("data_offset", self.data_offset),
        ] {
            if value < 0 {
                return Err(CaptionError::InvalidCount { field, value });
            }
        }

        if self.data_offset() < self.directory_end() {
            return Err(CaptionError::InvalidDataOffset {
                data_offset: self.data_offset,
                directory_end: self.directory_end(),
            });
        }

        Ok(())
    }
}
