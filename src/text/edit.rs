//! Editable text buffer with a caret and undo/redo.
//!
//! [`EditBuffer`] is a minimal editor host: it owns the text, a collapsed
//! caret and an undo history, and implements [`EditorHost`] so a
//! [`TagCloser`] can drive it the way a real editor would.
//!
//! # Examples
//!
//! ```
//! use tag_closer::{EditBuffer, TagCloser};
//!
//! let closer = TagCloser::new();
//! let mut buf = EditBuffer::new();
//! for c in "<ul>".chars() {
//!     buf.type_char(&closer, c).unwrap();
//! }
//! assert_eq!(buf.text(), "<ul></ul>");
//! assert_eq!(buf.caret(), 4);
//!
//! // The completion is a single undo step.
//! buf.undo();
//! assert_eq!(buf.text(), "<ul");
//! ```

use crate::closer::{Decision, EditorHost, TagCloser, TextEdit};
use crate::error::Result;
use crate::event::{DOCUMENT_CHANGED, emit_event};
use crate::input::VerifyEvent;
use crate::text::Document;

/// An edit operation for undo/redo.
#[derive(Clone, Debug)]
enum EditOp {
    Insert { offset: usize, text: String },
    Delete { offset: usize, text: String },
}

impl EditOp {
    fn invert(&self) -> Self {
        match self {
            Self::Insert { offset, text } => Self::Delete {
                offset: *offset,
                text: text.clone(),
            },
            Self::Delete { offset, text } => Self::Insert {
                offset: *offset,
                text: text.clone(),
            },
        }
    }
}

/// Default maximum number of undo groups to retain.
const DEFAULT_MAX_HISTORY_DEPTH: usize = 1000;

/// Edit history for undo/redo with bounded memory usage.
#[derive(Clone, Debug)]
struct History {
    undo_stack: Vec<Vec<EditOp>>,
    redo_stack: Vec<Vec<EditOp>>,
    current_group: Vec<EditOp>,
    /// Oldest groups are dropped past this depth.
    max_depth: usize,
}

impl Default for History {
    fn default() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            current_group: Vec::new(),
            max_depth: DEFAULT_MAX_HISTORY_DEPTH,
        }
    }
}

impl History {
    fn push(&mut self, op: EditOp) {
        self.current_group.push(op);
        self.redo_stack.clear();
    }

    fn commit(&mut self) {
        if !self.current_group.is_empty() {
            self.undo_stack.push(std::mem::take(&mut self.current_group));
            if self.undo_stack.len() > self.max_depth {
                let excess = self.undo_stack.len() - self.max_depth;
                self.undo_stack.drain(..excess);
            }
        }
    }

    fn pop_undo(&mut self) -> Option<Vec<EditOp>> {
        self.commit();
        self.undo_stack.pop()
    }

    fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty() || !self.current_group.is_empty()
    }

    fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.current_group.clear();
    }
}

/// Text buffer with a caret and grouped undo/redo.
///
/// Typed characters accumulate in the current undo group until
/// [`commit`](Self::commit). Edits applied through [`EditorHost`] always form
/// a group of their own and emit a single
/// [`DOCUMENT_CHANGED`](crate::event::DOCUMENT_CHANGED) event.
#[derive(Clone, Debug, Default)]
pub struct EditBuffer {
    doc: Document,
    caret: usize,
    history: History,
}

impl EditBuffer {
    /// Create a new empty edit buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an edit buffer with initial text and the caret at the start.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        Self {
            doc: Document::from(text),
            ..Self::default()
        }
    }

    /// Create an edit buffer with a custom maximum undo history depth.
    #[must_use]
    pub fn with_max_history_depth(max_depth: usize) -> Self {
        Self {
            history: History {
                max_depth,
                ..History::default()
            },
            ..Self::default()
        }
    }

    /// Get the current document snapshot.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Get the full text content.
    #[must_use]
    pub fn text(&self) -> String {
        self.doc.to_string()
    }

    /// Replace the entire text, resetting caret and history.
    pub fn set_text(&mut self, text: &str) {
        self.doc = Document::from(text);
        self.caret = 0;
        self.history.clear();
    }

    /// Get the caret offset.
    #[must_use]
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Set the caret offset, clamped to the document.
    pub fn set_caret(&mut self, offset: usize) {
        self.caret = self.doc.clamp(offset);
    }

    /// Insert text at the caret and move the caret past it.
    pub fn insert(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let offset = self.caret;
        self.insert_raw(offset, text);
        self.history.push(EditOp::Insert {
            offset,
            text: text.to_string(),
        });
        self.caret = offset + text.chars().count();
        emit_event(DOCUMENT_CHANGED, text);
    }

    /// Delete the character before the caret.
    pub fn delete_backward(&mut self) {
        let Some(start) = self.caret.checked_sub(1) else {
            return;
        };
        let deleted = self.remove_raw(start..self.caret);
        self.history.push(EditOp::Delete {
            offset: start,
            text: deleted,
        });
        self.caret = start;
        emit_event(DOCUMENT_CHANGED, "");
    }

    /// Type a character the way an editor would: the closer sees it first and
    /// the character is inserted only if the closer leaves `doit` set.
    pub fn type_char(&mut self, closer: &TagCloser, c: char) -> Result<Decision> {
        let mut event = VerifyEvent::char(c);
        let decision = closer.verify_key(self, &mut event)?;
        if event.doit {
            let mut buf = [0u8; 4];
            self.insert(c.encode_utf8(&mut buf));
        }
        Ok(decision)
    }

    /// Undo the last edit group.
    pub fn undo(&mut self) -> bool {
        let Some(ops) = self.history.pop_undo() else {
            return false;
        };

        let mut redo_ops = Vec::new();
        for op in ops.into_iter().rev() {
            self.apply_op(&op.invert());
            redo_ops.push(op);
        }
        redo_ops.reverse();
        self.history.redo_stack.push(redo_ops);
        emit_event(DOCUMENT_CHANGED, "");

        true
    }

    /// Redo the last undone edit group.
    pub fn redo(&mut self) -> bool {
        let Some(ops) = self.history.redo_stack.pop() else {
            return false;
        };

        for op in &ops {
            self.apply_op(op);
        }
        self.history.undo_stack.push(ops);
        emit_event(DOCUMENT_CHANGED, "");

        true
    }

    /// Check if undo is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.history.redo_stack.is_empty()
    }

    /// Commit current edits as an undo group.
    pub fn commit(&mut self) {
        self.history.commit();
    }

    fn apply_op(&mut self, op: &EditOp) {
        match op {
            EditOp::Insert { offset, text } => {
                self.insert_raw(*offset, text);
                self.caret = offset + text.chars().count();
            }
            EditOp::Delete { offset, text } => {
                self.remove_raw(*offset..offset + text.chars().count());
                self.caret = *offset;
            }
        }
    }

    fn insert_raw(&mut self, offset: usize, text: &str) {
        let mut rope = self.doc.inner().clone();
        rope.insert(offset, text);
        self.doc = Document::from(rope);
    }

    fn remove_raw(&mut self, range: std::ops::Range<usize>) -> String {
        let removed = self.doc.slice(range.clone()).to_string();
        let mut rope = self.doc.inner().clone();
        rope.remove(range);
        self.doc = Document::from(rope);
        removed
    }
}

impl EditorHost for EditBuffer {
    fn snapshot(&self) -> Document {
        self.doc.clone()
    }

    fn caret(&self) -> usize {
        self.caret
    }

    fn apply_edit(&mut self, edit: Option<&TextEdit>, caret: usize) -> Result<()> {
        let Some(edit) = edit else {
            self.set_caret(caret);
            return Ok(());
        };
        edit.validate(self.doc.len_chars())?;

        self.history.commit();
        if !edit.range.is_empty() {
            let deleted = self.remove_raw(edit.range.clone());
            self.history.push(EditOp::Delete {
                offset: edit.range.start,
                text: deleted,
            });
        }
        if !edit.text.is_empty() {
            self.insert_raw(edit.range.start, &edit.text);
            self.history.push(EditOp::Insert {
                offset: edit.range.start,
                text: edit.text.clone(),
            });
        }
        self.history.commit();

        self.set_caret(caret);
        emit_event(DOCUMENT_CHANGED, &edit.text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_edit_basic() {
        let mut edit = EditBuffer::new();
        edit.insert("Hello");
        assert_eq!(edit.text(), "Hello");
        assert_eq!(edit.caret(), 5);
    }

    #[test]
    fn test_edit_delete() {
        let mut edit = EditBuffer::with_text("<pp");
        edit.set_caret(3);
        edit.delete_backward();
        assert_eq!(edit.text(), "<p");
        assert_eq!(edit.caret(), 2);

        edit.set_caret(0);
        edit.delete_backward();
        assert_eq!(edit.text(), "<p");
    }

    #[test]
    fn test_set_caret_clamps() {
        let mut edit = EditBuffer::with_text("<br");
        edit.set_caret(4);
        assert_eq!(edit.caret(), 3);
    }

    #[test]
    fn test_edit_undo_redo() {
        let mut edit = EditBuffer::new();
        edit.insert("<b");
        edit.commit();
        edit.insert(" id=x");
        edit.commit();
        assert_eq!(edit.text(), "<b id=x");

        assert!(edit.undo());
        assert_eq!(edit.text(), "<b");
        assert!(edit.can_redo());

        assert!(edit.redo());
        assert_eq!(edit.text(), "<b id=x");
        assert_eq!(edit.caret(), 7);
    }

    #[test]
    fn test_history_depth_limit() {
        let mut edit = EditBuffer::with_max_history_depth(3);
        for i in 0..5 {
            edit.insert(&format!("{i}"));
            edit.commit();
        }
        assert_eq!(edit.text(), "01234");

        assert!(edit.undo());
        assert!(edit.undo());
        assert!(edit.undo());
        assert!(!edit.undo());
        assert_eq!(edit.text(), "01");
    }

    #[test]
    fn test_apply_edit_is_one_undo_group() {
        let mut edit = EditBuffer::new();
        edit.insert("<p");
        edit.apply_edit(Some(&TextEdit::insert(2, "></p>")), 3).unwrap();
        assert_eq!(edit.text(), "<p></p>");
        assert_eq!(edit.caret(), 3);

        assert!(edit.undo());
        assert_eq!(edit.text(), "<p");
        assert!(edit.undo());
        assert_eq!(edit.text(), "");
    }

    #[test]
    fn test_apply_edit_replaces_range() {
        let mut edit = EditBuffer::with_text("<b></i>");
        let fix = TextEdit {
            range: 5..6,
            text: "b".to_string(),
        };
        edit.apply_edit(Some(&fix), 7).unwrap();
        assert_eq!(edit.text(), "<b></b>");
        edit.undo();
        assert_eq!(edit.text(), "<b></i>");
    }

    #[test]
    fn test_apply_edit_out_of_bounds() {
        let mut edit = EditBuffer::with_text("<p");
        let err = edit
            .apply_edit(Some(&TextEdit::insert(5, "x")), 5)
            .unwrap_err();
        assert_eq!(err, Error::OutOfBounds { offset: 5, len: 2 });
        assert_eq!(edit.text(), "<p");
    }

    #[test]
    fn test_apply_caret_only() {
        let mut edit = EditBuffer::with_text("<p></p>");
        edit.apply_edit(None, 3).unwrap();
        assert_eq!(edit.caret(), 3);
        assert!(!edit.can_undo());
    }

    #[test]
    fn test_type_char_through_closer() {
        let closer = TagCloser::new();
        let mut edit = EditBuffer::new();
        for c in "<div>hi".chars() {
            edit.type_char(&closer, c).unwrap();
        }
        assert_eq!(edit.text(), "<div>hi</div>");
        assert_eq!(edit.caret(), 7);
    }

    #[test]
    fn test_set_text_resets() {
        let mut edit = EditBuffer::new();
        edit.insert("x");
        edit.set_text("<p");
        assert_eq!(edit.caret(), 0);
        assert!(!edit.can_undo());
    }
}
