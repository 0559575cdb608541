//! Fixed-capacity payload blocks
//!
//! Payloads are appended to the current block until the next one would not
//! fit. At that point the block is zero-padded to exactly `block_size` and
//! frozen, and packing continues in a fresh block. A payload is never split
//! across two blocks.

use crate::closecaption::error::{CaptionError, Result};
use tracing::trace;

/// Where a payload landed after packing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Index of the block holding the payload
    pub block_index: i32,
    /// Byte offset within that block
    pub offset: u16,
    /// Payload length in bytes
    pub length: u16,
}

/// Packs payloads into blocks of `block_size` bytes
#[derive(Debug, Clone)]
pub struct BlockPacker {
    block_size: u32,
    finished: Vec<Vec<u8>>,
    current: Vec<u8>,
}

impl BlockPacker {
    /// Create a packer with one empty block in progress
    pub fn new(block_size: u32) -> Self {
        Self {
            block_size,
            finished: Vec::new(),
            current: Vec::with_capacity(block_size as usize),
        }
    }

    /// Configured block capacity
    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    /// Number of blocks, including the one in progress
    pub fn block_count(&self) -> usize {
        self.finished.len() + 1
    }

    /// Bytes used in the block in progress
    pub fn current_len(&self) -> usize {
        self.current.len()
    }

    /// Place a payload, rolling over to a new block if it does not fit
    ///
    /// `key` is only used for error reporting. Payloads larger than a whole
    /// block are rejected instead of overflowing it.
    pub fn place(&mut self, key: &str, payload: &[u8]) -> Result<Placement> {
        let capacity = self.block_size as usize;
        if payload.len() > capacity || u16::try_from(payload.len()).is_err() {
            return Err(CaptionError::PayloadTooLarge {
                key: key.to_string(),
                length: payload.len(),
                block_size: self.block_size,
            });
        }

        if self.current.len() + payload.len() > capacity {
            self.roll_over();
        }

        let placement = Placement {
            block_index: (self.block_count() - 1) as i32,
            offset: self.current.len() as u16,
            length: payload.len() as u16,
        };
        self.current.extend_from_slice(payload);

        Ok(placement)
    }

    /// Pad the final block and return every block in order
    pub fn finish(mut self) -> Vec<Vec<u8>> {
        self.current.resize(self.block_size as usize, 0);
        self.finished.push(self.current);
        self.finished
    }

    fn roll_over(&mut self) {
        trace!(
            block = self.finished.len(),
            used = self.current.len(),
            "block full, starting a new one"
        );
        let mut block = std::mem::replace(
            &mut self.current,
            Vec::with_capacity(self.block_size as usize),
        );
        block.resize(self.block_size as usize, 0);
        self.finished.push(block);
    }
}
