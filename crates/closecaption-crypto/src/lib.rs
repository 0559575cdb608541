//! Hashing primitives for Source engine closed caption containers
//!
//! Caption directories are keyed by a 32-bit hash of the caption name rather
//! than the name itself. This crate provides that hash and a small trait so
//! callers can substitute their own primitive.
//!
//! # Examples
//!
//! ```
//! use closecaption_crypto::{CaptionKeyHasher, KeyHasher};
//!
//! let hasher = CaptionKeyHasher::new();
//! let hash = hasher.hash_key("Caption_001").unwrap();
//! println!("Caption hash: {hash:08x}");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod key_hash;

pub use error::{HashError, Result};
pub use key_hash::{CaptionKeyHasher, KeyHasher, hash_caption_key};
