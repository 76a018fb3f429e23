//! Verify events: a key about to be inserted, with a veto flag.

use super::keyboard::KeyEvent;

/// A key the host is about to insert.
///
/// Handlers clear `doit` to stop the host from inserting the character
/// itself, typically because they already edited the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerifyEvent {
    /// The key being typed.
    pub key: KeyEvent,
    /// Whether the host should perform its default insertion.
    pub doit: bool,
}

impl VerifyEvent {
    /// Create an event with `doit` set.
    #[must_use]
    pub fn new(key: KeyEvent) -> Self {
        Self { key, doit: true }
    }

    /// Create an event for a plain character.
    #[must_use]
    pub fn char(c: char) -> Self {
        Self::new(KeyEvent::char(c))
    }

    /// The character this event inserts, if it inserts text at all.
    #[must_use]
    pub fn character(&self) -> Option<char> {
        self.key.text_input()
    }
}

impl From<KeyEvent> for VerifyEvent {
    fn from(key: KeyEvent) -> Self {
        Self::new(key)
    }
}
