//! Document storage and a minimal editing host.
//!
//! Key types:
//!
//! - [`Document`]: immutable rope snapshot handed to the closer per keystroke
//! - [`EditBuffer`]: editable buffer with a caret and undo/redo
//!
//! # Examples
//!
//! ```
//! use tag_closer::Document;
//!
//! let doc = Document::from("<p>");
//! assert_eq!(doc.len_chars(), 3);
//! assert_eq!(doc.char_at(2), Some('>'));
//! ```

mod document;
mod edit;

pub use document::Document;
pub use edit::EditBuffer;
