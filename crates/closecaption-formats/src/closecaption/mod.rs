//! Closed caption container format (`VCCD` magic)
//!
//! Source engine games ship subtitles as compiled caption containers. The
//! container has no string keys: each caption is addressed by a 32-bit hash of
//! its name, and its UTF-16LE text lives in one of a series of fixed-size
//! blocks.
//!
//! # Format Overview
//!
//! - Header: 24 bytes, six little-endian i32 fields
//! - Directory: 12 bytes per caption (hash, block index, offset, length),
//!   written in source order
//! - Zero padding up to `data_offset`, a multiple of 512
//! - Blocks: `block_count` blocks of exactly `block_size` bytes (default 8192)
//! - Zero padding up to the next multiple of 512
//!
//! Every payload is the caption encoded as UTF-16LE plus a two-byte NUL
//! terminator. A payload never straddles a block boundary; a caption whose
//! payload is larger than a whole block is rejected when building.
//!
//! # Usage
//!
//! ```rust
//! use closecaption_formats::closecaption::{CaptionBuilder, CaptionFile};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let file = CaptionBuilder::new()
//!     .add_caption("NPC_Alyx.Hello", "<clr:255,212,0>Hey, Gordon!")
//!     .add_caption("World.Siren", "[Siren wailing]")
//!     .build()?;
//!
//! let data = file.build()?;
//! assert_eq!(data.len() % 512, 0);
//!
//! let parsed = CaptionFile::parse(&data)?;
//! for caption in parsed.sorted_by_hash()? {
//!     println!("{:08x}: {}", caption.hash(), caption.text);
//! }
//! # Ok(())
//! # }
//! ```

pub mod block;
pub mod builder;
pub mod entry;
pub mod error;
pub mod file;
pub mod header;

// Re-export main types
pub use block::{BlockPacker, Placement};
pub use builder::CaptionBuilder;
pub use entry::{
    DIRECTORY_ENTRY_SIZE, DirectoryEntry, ResolvedCaption, decode_payload, encode_payload,
};
pub use error::{CaptionError, Result};
pub use file::CaptionFile;
pub use header::{
    CAPTION_MAGIC, CAPTION_VERSION, CaptionHeader, DATA_ALIGNMENT, DEFAULT_BLOCK_SIZE,
    HEADER_SIZE, MAX_BLOCK_SIZE, align_up, data_offset_for,
};
