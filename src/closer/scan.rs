//! Forward closure scan.
//!
//! Answers: starting right after the tag being typed, is that tag already
//! closed later on? Balanced subtrees in between are transparent; the first
//! closing tag that has no opener after the scan start decides.

use super::options::CloserOptions;
use super::token::next_tag;
use super::void::is_void_element;
use crate::text::Document;

/// Check whether a closing tag for `target` follows `from` at depth zero.
#[must_use]
pub fn will_close_later(doc: &Document, from: usize, target: &str) -> bool {
    will_close_later_with(doc, from, target, &CloserOptions::default())
}

/// [`will_close_later`] with caller-supplied options.
#[must_use]
pub fn will_close_later_with(
    doc: &Document,
    from: usize,
    target: &str,
    options: &CloserOptions,
) -> bool {
    let mut open: Vec<String> = Vec::new();
    let mut cursor = from;

    while let Some(token) = next_tag(doc, cursor) {
        cursor = token.end();

        if token.is_closing {
            // Nesting is not validated: any closer pops whatever is open.
            if open.pop().is_none() {
                return options.names_match(&token.name, target);
            }
        } else if !token.is_self_closing && !is_void_element(&token.name, options) {
            open.push(token.name);
        }
    }

    false
}
