//! Error types for tag_closer.

use std::fmt;

/// Result type alias for tag_closer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for tag_closer operations.
///
/// Decisions themselves never fail; these errors only surface at the host
/// boundary, when an edit is applied or options are configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Offset past the end of the document.
    OutOfBounds { offset: usize, len: usize },
    /// Range whose start lies after its end.
    InvalidRange { start: usize, end: usize },
    /// Tag name that is not a non-empty run of ASCII letters, digits or `-`.
    InvalidTagName(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { offset, len } => {
                write!(f, "offset {offset} out of bounds for document of {len} chars")
            }
            Self::InvalidRange { start, end } => {
                write!(f, "invalid range: {start}..{end}")
            }
            Self::InvalidTagName(name) => write!(f, "invalid tag name: {name:?}"),
        }
    }
}

impl std::error::Error for Error {}
