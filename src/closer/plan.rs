//! Edit planning: turns a typed `>` into a [`Decision`].

use std::ops::Range;

use super::options::CloserOptions;
use super::scan::will_close_later_with;
use super::token::{self, TagToken};
use super::void::is_self_closing_with;
use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log_with};
use crate::text::Document;

/// A text replacement in character offsets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextEdit {
    /// Range replaced by `text`. Empty for pure insertions.
    pub range: Range<usize>,
    /// Replacement text.
    pub text: String,
}

impl TextEdit {
    /// Create an insertion at `offset`.
    #[must_use]
    pub fn insert(offset: usize, text: impl Into<String>) -> Self {
        Self {
            range: offset..offset,
            text: text.into(),
        }
    }

    /// Check the edit fits a document of `len` characters.
    pub fn validate(&self, len: usize) -> Result<()> {
        if self.range.start > self.range.end {
            return Err(Error::InvalidRange {
                start: self.range.start,
                end: self.range.end,
            });
        }
        if self.range.end > len {
            return Err(Error::OutOfBounds {
                offset: self.range.end,
                len,
            });
        }
        Ok(())
    }

    /// Apply the edit to a snapshot, producing a new one.
    pub fn apply_to(&self, doc: &Document) -> Result<Document> {
        self.validate(doc.len_chars())?;
        let mut rope = doc.inner().clone();
        rope.remove(self.range.clone());
        rope.insert(self.range.start, &self.text);
        Ok(Document::from(rope))
    }
}

/// Outcome of typing `>`; exactly one per keystroke.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Decision {
    /// Leave the document alone and let the `>` be inserted normally.
    #[default]
    NoAction,
    /// Step over a `>` already at the caret instead of inserting another.
    OverwriteBracket { caret_offset: usize },
    /// Insert the closing tag and put the caret between the pair.
    InsertPair {
        edit: TextEdit,
        caret_offset: usize,
        /// Name of the tag being closed.
        tag: String,
    },
}

impl Decision {
    /// Check if this is [`Decision::NoAction`].
    #[must_use]
    pub fn is_no_action(&self) -> bool {
        matches!(self, Self::NoAction)
    }

    /// Whether the host must drop its own insertion of `>`.
    #[must_use]
    pub fn suppresses_default(&self) -> bool {
        !self.is_no_action()
    }

    /// Caret offset after the decision is applied, if it moves the caret.
    #[must_use]
    pub fn caret_offset(&self) -> Option<usize> {
        match self {
            Self::NoAction => None,
            Self::OverwriteBracket { caret_offset } | Self::InsertPair { caret_offset, .. } => {
                Some(*caret_offset)
            }
        }
    }

    /// Text edit carried by the decision, if any.
    #[must_use]
    pub fn edit(&self) -> Option<&TextEdit> {
        match self {
            Self::InsertPair { edit, .. } => Some(edit),
            _ => None,
        }
    }
}

/// Plan the response to `typed` at `caret`.
///
/// Only `>` is ever acted on. The caret is clamped to the document.
#[must_use]
pub fn plan(doc: &Document, caret: usize, typed: char, options: &CloserOptions) -> Decision {
    if typed != '>' {
        return Decision::NoAction;
    }
    let caret = doc.clamp(caret);

    let decision = match token::extract(doc, caret) {
        Some(token) => plan_in_tag(doc, caret, &token, options),
        None if options.complete_after_bracket => plan_after_bracket(doc, caret, options),
        None => Decision::NoAction,
    };
    emit_log_with(LogLevel::Debug, || format!("tag closer at {caret}: {decision:?}"));
    decision
}

/// Caret inside an unterminated `<name...`, possibly with its `>` at the caret.
fn plan_in_tag(
    doc: &Document,
    caret: usize,
    token: &TagToken,
    options: &CloserOptions,
) -> Decision {
    if !is_open_tag(doc, token, caret, options) {
        return Decision::NoAction;
    }

    let scan_start = token.bracket.map_or(caret, |bracket| bracket + 1);
    if will_close_later_with(doc, scan_start, &token.name, options) {
        return match token.bracket {
            Some(_) => Decision::OverwriteBracket {
                caret_offset: caret + 1,
            },
            None => Decision::NoAction,
        };
    }

    let edit = match token.bracket {
        Some(bracket) => TextEdit::insert(bracket + 1, token.closing_text()),
        None => TextEdit::insert(caret, format!(">{}", token.closing_text())),
    };
    Decision::InsertPair {
        edit,
        caret_offset: caret + 1,
        tag: token.name.clone(),
    }
}

/// Caret right after the `>` terminating an opening tag.
fn plan_after_bracket(doc: &Document, caret: usize, options: &CloserOptions) -> Decision {
    let Some(bracket) = caret.checked_sub(1) else {
        return Decision::NoAction;
    };
    if doc.char_at(bracket) != Some('>') {
        return Decision::NoAction;
    }
    let Some(token) = token::extract(doc, bracket) else {
        return Decision::NoAction;
    };
    if !is_open_tag(doc, &token, bracket, options)
        || will_close_later_with(doc, caret, &token.name, options)
    {
        return Decision::NoAction;
    }

    Decision::InsertPair {
        edit: TextEdit::insert(caret, token.closing_text()),
        caret_offset: caret,
        tag: token.name,
    }
}

fn is_open_tag(doc: &Document, token: &TagToken, caret: usize, options: &CloserOptions) -> bool {
    !token.is_closing && !is_self_closing_with(doc, token, caret, options)
}
