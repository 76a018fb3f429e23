//! `tag_closer` - closing-tag completion for markup editors
//!
//! Decides, at the moment `>` is typed, whether to insert the matching
//! closing tag, where the caret goes, and whether the editor's own insertion
//! of `>` should be suppressed.

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::module_name_repetitions)] // Allow closer::CloserOptions etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::should_implement_trait)] // from_str naming is intentional
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::items_after_statements)] // Common pattern in tests

pub mod closer;
pub mod error;
pub mod event;
pub mod input;
pub mod text;

// Re-export core types at crate root
pub use closer::{CloserOptions, Decision, EditorHost, TagCloser, TagToken, TextEdit};
pub use error::{Error, Result};
pub use event::{
    LogLevel, clear_event_callback, clear_log_callback, emit_event, emit_log, set_event_callback,
    set_log_callback,
};
pub use input::{KeyCode, KeyEvent, KeyModifiers, VerifyEvent};
pub use text::{Document, EditBuffer};
