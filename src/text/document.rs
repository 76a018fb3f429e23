//! Immutable document snapshots backed by the ropey crate.

use std::fmt;
use std::ops::RangeBounds;

use ropey::iter::Chars;
use ropey::{Rope, RopeSlice};

/// Read-only view of editor text at decision time.
///
/// Offsets are zero-based character indices. Cloning is cheap: ropey shares
/// its nodes, so a host can hand out a snapshot per keystroke without copying
/// the text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    rope: Rope,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a document from a string.
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }

    /// Get the number of characters.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Clamp an offset to `[0, len_chars]`.
    #[must_use]
    pub fn clamp(&self, offset: usize) -> usize {
        offset.min(self.len_chars())
    }

    /// Get the character at an offset, or `None` past the end.
    #[must_use]
    pub fn char_at(&self, offset: usize) -> Option<char> {
        self.rope.get_char(offset)
    }

    /// Iterate characters starting at an offset (clamped).
    ///
    /// The returned iterator also walks backward through `prev()`.
    #[must_use]
    pub fn chars_at(&self, offset: usize) -> Chars<'_> {
        self.rope.chars_at(self.clamp(offset))
    }

    /// Get a slice of the document. Out-of-range slices come back empty.
    #[must_use]
    pub fn slice<R>(&self, range: R) -> RopeSlice<'_>
    where
        R: RangeBounds<usize>,
    {
        self.rope
            .get_slice(range)
            .unwrap_or_else(|| self.rope.slice(..0))
    }

    /// Get access to the underlying rope.
    #[must_use]
    pub fn inner(&self) -> &Rope {
        &self.rope
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.rope, f)
    }
}

impl From<&str> for Document {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

impl From<String> for Document {
    fn from(s: String) -> Self {
        Self::from_str(&s)
    }
}

impl From<Rope> for Document {
    fn from(rope: Rope) -> Self {
        Self { rope }
    }
}
