//! Caption source text reader
//!
//! Caption sources are UTF-16LE KeyValues-style text files. Only lines of the
//! form `"KEY" "TEXT"` carry captions; braces, comments, and section names
//! are ignored.
//!
//! ```text
//! "lang"
//! {
//!     "Language" "english"
//!     "Tokens"
//!     {
//!         "NPC_Alyx.Hello"    "<clr:255,212,0>Hey, Gordon!"
//!     }
//! }
//! ```

pub mod error;
pub mod reader;

pub use error::{Result, SourceError};
pub use reader::{CaptionPair, CaptionSource, ENGLISH_PREFIX, LANGUAGE_KEY};
