//! Closing-tag completion for markup editing.
//!
//! When `>` is typed at the end of an opening tag, the closer decides whether
//! to insert the matching closing tag, step over an existing `>`, or do
//! nothing. The decision itself is pure ([`TagCloser::decide`]); applying it
//! to an editor goes through [`EditorHost`] ([`TagCloser::verify_key`]).
//!
//! # Examples
//!
//! ```
//! use tag_closer::{Decision, Document, TagCloser, TextEdit};
//!
//! let closer = TagCloser::new();
//! let decision = closer.decide(&Document::from("<p"), 2, '>');
//! assert_eq!(
//!     decision,
//!     Decision::InsertPair {
//!         edit: TextEdit::insert(2, "></p>"),
//!         caret_offset: 3,
//!         tag: "p".to_string(),
//!     }
//! );
//! ```

mod options;
mod plan;
pub mod scan;
pub mod token;
pub mod void;

pub use options::CloserOptions;
pub use plan::{Decision, TextEdit, plan};
pub use token::TagToken;

use crate::error::Result;
use crate::event::{TAG_CLOSED, emit_event};
use crate::input::VerifyEvent;
use crate::text::Document;

/// The editor side of a keystroke: document, caret and a way to edit both.
pub trait EditorHost {
    /// Snapshot of the current text.
    fn snapshot(&self) -> Document;

    /// Current caret offset. The selection is assumed collapsed.
    fn caret(&self) -> usize;

    /// Apply an optional text edit and move the caret, as one step.
    ///
    /// Observers must never see the edit without the caret move or vice
    /// versa.
    fn apply_edit(&mut self, edit: Option<&TextEdit>, caret: usize) -> Result<()>;
}

/// Entry point for closing-tag completion.
///
/// Stateless between keystrokes; one instance can serve any number of
/// documents.
#[derive(Clone, Debug, Default)]
pub struct TagCloser {
    options: CloserOptions,
}

impl TagCloser {
    /// Create a closer with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a closer with the given options.
    #[must_use]
    pub fn with_options(options: CloserOptions) -> Self {
        Self { options }
    }

    /// Get the options.
    #[must_use]
    pub fn options(&self) -> &CloserOptions {
        &self.options
    }

    /// Decide what typing `typed` at `caret` should do.
    #[must_use]
    pub fn decide(&self, doc: &Document, caret: usize, typed: char) -> Decision {
        plan(doc, caret, typed, &self.options)
    }

    /// Handle a key about to be inserted by the host.
    ///
    /// For `>` the decision is applied to `host` and `event.doit` is cleared
    /// unless the decision is [`Decision::NoAction`]. Other keys leave both
    /// untouched.
    pub fn verify_key<H>(&self, host: &mut H, event: &mut VerifyEvent) -> Result<Decision>
    where
        H: EditorHost + ?Sized,
    {
        let Some(typed) = event.character() else {
            return Ok(Decision::NoAction);
        };
        if typed != '>' {
            return Ok(Decision::NoAction);
        }

        let decision = self.decide(&host.snapshot(), host.caret(), typed);
        match &decision {
            Decision::NoAction => return Ok(decision),
            Decision::OverwriteBracket { caret_offset } => {
                host.apply_edit(None, *caret_offset)?;
            }
            Decision::InsertPair {
                edit,
                caret_offset,
                tag,
            } => {
                host.apply_edit(Some(edit), *caret_offset)?;
                emit_event(TAG_CLOSED, tag);
            }
        }
        event.doit = false;
        Ok(decision)
    }
}
