//! Error types for closed caption container parsing and building

use closecaption_crypto::HashError;
use thiserror::Error;

/// Errors that can occur when parsing or building caption containers
#[derive(Debug, Error)]
pub enum CaptionError {
    /// Header magic does not match `VCCD`
    #[error("Invalid caption magic: expected 0x44434356 ('VCCD'), got 0x{0:08x}")]
    InvalidMagic(i32),

    /// Unsupported container version
    #[error("Unsupported caption version: {0}")]
    UnsupportedVersion(i32),

    /// Block size is zero, negative, or too large for 16-bit offsets
    #[error("Invalid block size: {0} (must be 1..=65536)")]
    InvalidBlockSize(i64),

    /// A header count field is negative
    #[error("Invalid {field} in header: {value}")]
    InvalidCount {
        /// Name of the header field
        field: &'static str,
        /// Value that was read
        value: i32,
    },

    /// Data offset points inside the header or directory
    #[error("Data offset {data_offset} overlaps directory ending at {directory_end}")]
    InvalidDataOffset {
        /// Data offset from the header
        data_offset: i32,
        /// First byte after the directory table
        directory_end: u64,
    },

    /// Input ended before a section was complete
    #[error("Truncated {section}: expected {expected} bytes, got {actual} bytes")]
    TruncatedData {
        /// Section being read
        section: &'static str,
        /// Bytes required
        expected: u64,
        /// Bytes available
        actual: u64,
    },

    /// Directory entry points at a block that does not exist
    #[error("Entry {hash:08x} references block {block_index}, but container has {block_count} blocks")]
    BlockIndexOutOfRange {
        /// Hash of the offending entry
        hash: u32,
        /// Referenced block
        block_index: i32,
        /// Number of blocks in the container
        block_count: usize,
    },

    /// Directory entry extends past the end of its block
    #[error(
        "Entry {hash:08x} at offset {offset} with length {length} exceeds block size {block_size}"
    )]
    EntryOutOfBounds {
        /// Hash of the offending entry
        hash: u32,
        /// Offset within the block
        offset: u16,
        /// Payload length
        length: u16,
        /// Block size from the header
        block_size: u32,
    },

    /// Payload length cannot hold a UTF-16 terminator
    #[error("Entry {hash:08x} has invalid payload length {length}")]
    InvalidPayloadLength {
        /// Hash of the offending entry
        hash: u32,
        /// Payload length
        length: u16,
    },

    /// Payload bytes are not valid UTF-16LE
    #[error("Entry {hash:08x} contains invalid UTF-16 text")]
    InvalidText {
        /// Hash of the offending entry
        hash: u32,
    },

    /// Encoded caption does not fit in a single block
    #[error("Caption '{key}' encodes to {length} bytes, which exceeds block size {block_size}")]
    PayloadTooLarge {
        /// Caption key
        key: String,
        /// Encoded payload length including terminator
        length: usize,
        /// Configured block size
        block_size: u32,
    },

    /// Header disagrees with the in-memory contents
    #[error("{field} mismatch: header says {expected}, found {actual}")]
    CountMismatch {
        /// Name of the header field
        field: &'static str,
        /// Value in the header
        expected: i64,
        /// Value derived from the contents
        actual: i64,
    },

    /// Key could not be hashed
    #[error("Key hash error: {0}")]
    Hash(#[from] HashError),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Binary read/write error
    #[error("Binary format error: {0}")]
    BinRw(#[from] binrw::Error),
}

/// Type alias for caption container operation results
pub type Result<T> = std::result::Result<T, CaptionError>;
