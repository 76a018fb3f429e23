//! Key input delivered by the host editor.
//!
//! The host reports each key it is about to insert as a [`VerifyEvent`];
//! handlers may veto the default insertion by clearing its `doit` flag.

mod keyboard;
mod verify;

pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
pub use verify::VerifyEvent;
