//! Fuzz target for closing-tag decisions.
//!
//! Feeds arbitrary documents and carets through the closer and checks that
//! every produced edit applies cleanly.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tag_closer::{CloserOptions, Document, TagCloser};

#[derive(Arbitrary, Debug)]
struct DecideInput {
    text: String,
    caret: u16,
    typed: char,
    complete_after_bracket: bool,
}

fuzz_target!(|input: DecideInput| {
    let closer = TagCloser::with_options(
        CloserOptions::new().with_complete_after_bracket(input.complete_after_bracket),
    );
    let doc = Document::from(input.text.as_str());
    let decision = closer.decide(&doc, usize::from(input.caret), input.typed);

    if let Some(edit) = decision.edit() {
        assert!(edit.apply_to(&doc).is_ok());
    }
    if !decision.is_no_action() {
        assert_eq!(input.typed, '>');
    }
});
