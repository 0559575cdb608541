//! Caption key hash used by closed caption directories
//!
//! Directory entries never store the caption key itself. The engine looks a
//! caption up by hashing the requested key and searching the directory for a
//! matching 32-bit value, so the hash has to be bit-for-bit stable across runs
//! and across tools.
//!
//! The Source engine hashes the lowercased key with the same CRC-32 used by
//! zlib and PNG (IEEE polynomial, reflected, `0xFFFFFFFF` init and final xor).

use crate::error::{HashError, Result};

/// Maps a caption key to its 32-bit directory hash
///
/// Implementations must be deterministic. Any closure `Fn(&str) -> u32` is a
/// `KeyHasher` as well, which is handy for tests that need controlled hashes.
pub trait KeyHasher {
    /// Hash a caption key
    fn hash_key(&self, key: &str) -> Result<u32>;
}

/// Default caption key hasher: CRC-32 over the ASCII-lowercased key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptionKeyHasher;

impl CaptionKeyHasher {
    /// Create a new hasher
    pub const fn new() -> Self {
        Self
    }
}

impl KeyHasher for CaptionKeyHasher {
    fn hash_key(&self, key: &str) -> Result<u32> {
        hash_caption_key(key)
    }
}

impl<F> KeyHasher for F
where
    F: Fn(&str) -> u32,
{
    fn hash_key(&self, key: &str) -> Result<u32> {
        Ok(self(key))
    }
}

/// Hash a caption key the way the engine does
///
/// # Examples
///
/// ```
/// use closecaption_crypto::key_hash::hash_caption_key;
///
/// let a = hash_caption_key("Caption_001").unwrap();
/// let b = hash_caption_key("caption_001").unwrap();
/// assert_eq!(a, b);
/// ```
pub fn hash_caption_key(key: &str) -> Result<u32> {
    if !key.is_ascii() {
        return Err(HashError::NonAsciiKey(key.to_string()));
    }

    let lowered = key.to_ascii_lowercase();
    Ok(crc32fast::hash(lowered.as_bytes()))
}
