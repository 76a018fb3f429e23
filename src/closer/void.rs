//! Self-closing classification: void elements and the explicit `/` marker.

use super::options::CloserOptions;
use super::token::TagToken;
use crate::text::Document;

/// Elements that never carry a body and so never get a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "br", "col", "embed", "frame", "hr", "img", "input", "isindex",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

/// Check whether `name` is a void element, ignoring ASCII case.
#[must_use]
pub fn is_void_element(name: &str, options: &CloserOptions) -> bool {
    VOID_ELEMENTS
        .iter()
        .copied()
        .chain(options.extra_void_elements.iter().map(String::as_str))
        .any(|void| void.eq_ignore_ascii_case(name))
}

/// Check whether the last non-whitespace character before `caret` is `/`.
#[must_use]
pub fn has_self_closing_marker(doc: &Document, caret: usize) -> bool {
    let mut chars = doc.chars_at(caret);
    while let Some(c) = chars.prev() {
        if !c.is_whitespace() {
            return c == '/';
        }
    }
    false
}

/// Decide whether the tag being typed at `caret` closes itself.
#[must_use]
pub fn is_self_closing(doc: &Document, token: &TagToken, caret: usize) -> bool {
    is_self_closing_with(doc, token, caret, &CloserOptions::default())
}

/// [`is_self_closing`] with caller-supplied void elements.
#[must_use]
pub fn is_self_closing_with(
    doc: &Document,
    token: &TagToken,
    caret: usize,
    options: &CloserOptions,
) -> bool {
    is_void_element(&token.name, options) || has_self_closing_marker(doc, caret)
}
