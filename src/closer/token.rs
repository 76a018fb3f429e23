//! Tag tokenization shared by the backward extractor and the forward scanner.
//!
//! A tag head is `<`, an optional `/`, then a non-empty run of ASCII letters,
//! digits or `-`. Anything else after `<` (`<!--`, `<?`, `< `) is not a tag.

use crate::text::Document;

/// A tag recognised in the document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagToken {
    /// Tag name as written, without `<`, `/` or attributes.
    pub name: String,
    /// `</name` form.
    pub is_closing: bool,
    /// Terminated by `/>`. Never set together with `is_closing`.
    pub is_self_closing: bool,
    /// Offset of the opening `<`.
    pub start: usize,
    /// Offset one past the last name character.
    pub name_end: usize,
    /// Offset of the `>` terminating the tag, when present.
    pub bracket: Option<usize>,
}

impl TagToken {
    /// Offset at which scanning resumes after this tag.
    #[must_use]
    pub fn end(&self) -> usize {
        self.bracket.map_or(self.name_end, |bracket| bracket + 1)
    }

    /// The closing form of this tag, e.g. `</p>`.
    #[must_use]
    pub fn closing_text(&self) -> String {
        format!("</{}>", self.name)
    }
}

/// Characters allowed in a tag name.
#[must_use]
pub fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

/// Check that `name` is a non-empty run of tag-name characters.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_name_char)
}

/// Extract the tag currently being typed at `caret`.
///
/// Walks backward from `caret - 1` to the nearest `<`; a `>` on the way means
/// the caret is not inside an unterminated tag. The name stops at the caret.
/// When the character at the caret is `>`, it is recorded as the tag's
/// bracket.
#[must_use]
pub fn extract(doc: &Document, caret: usize) -> Option<TagToken> {
    let caret = doc.clamp(caret);
    let mut chars = doc.chars_at(caret);
    let mut offset = caret;
    let start = loop {
        offset = offset.checked_sub(1)?;
        match chars.prev()? {
            '>' => return None,
            '<' => break offset,
            _ => {}
        }
    };

    let mut token = read_head(doc, start, caret)?;
    if doc.char_at(caret) == Some('>') {
        token.bracket = Some(caret);
    }
    Some(token)
}

/// Find the next tag at or after `from`.
///
/// The returned token carries its `>` bracket and explicit `/>` marker when
/// the tag is terminated. Quoted attribute values are skipped while looking
/// for the bracket. A `<` that does not start a tag is passed over.
#[must_use]
pub fn next_tag(doc: &Document, from: usize) -> Option<TagToken> {
    let len = doc.len_chars();
    let mut from = doc.clamp(from);
    loop {
        let start = find_char(doc, from, '<')?;
        match read_head(doc, start, len) {
            Some(mut token) => {
                if let Some((bracket, slash)) = find_tag_end(doc, token.name_end) {
                    token.bracket = Some(bracket);
                    token.is_self_closing = slash && !token.is_closing;
                }
                return Some(token);
            }
            None => from = start + 1,
        }
    }
}

/// Read `<`, optional `/` and the name, with the name stopping at `limit`.
fn read_head(doc: &Document, start: usize, limit: usize) -> Option<TagToken> {
    let mut chars = doc.chars_at(start + 1).peekable();
    let mut offset = start + 1;
    let is_closing = chars.next_if_eq(&'/').is_some();
    if is_closing {
        offset += 1;
    }

    let mut name = String::new();
    while offset < limit {
        match chars.next_if(|&c| is_name_char(c)) {
            Some(c) => {
                name.push(c);
                offset += 1;
            }
            None => break,
        }
    }

    if name.is_empty() {
        return None;
    }
    Some(TagToken {
        name,
        is_closing,
        is_self_closing: false,
        start,
        name_end: offset,
        bracket: None,
    })
}

/// Locate the `>` ending a tag whose attributes start at `from`.
///
/// Returns the bracket offset and whether the last non-whitespace character
/// before it is `/`. A `<` outside quotes, or the end of the document, means
/// the tag is unterminated.
fn find_tag_end(doc: &Document, from: usize) -> Option<(usize, bool)> {
    let mut quote = None;
    let mut last = None;
    for (offset, c) in (from..).zip(doc.chars_at(from)) {
        if let Some(q) = quote {
            if c == q {
                quote = None;
                last = Some(c);
            }
            continue;
        }
        match c {
            '>' => return Some((offset, last == Some('/'))),
            '<' => return None,
            '"' | '\'' => quote = Some(c),
            _ => {}
        }
        if !c.is_whitespace() {
            last = Some(c);
        }
    }
    None
}

fn find_char(doc: &Document, from: usize, needle: char) -> Option<usize> {
    (from..)
        .zip(doc.chars_at(from))
        .find_map(|(offset, c)| (c == needle).then_some(offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(s: &str) -> Document {
        Document::from(s)
    }

    #[test]
    fn test_extract_open_tag() {
        let token = extract(&doc("<p"), 2).unwrap();
        assert_eq!(token.name, "p");
        assert!(!token.is_closing);
        assert_eq!(token.start, 0);
        assert_eq!(token.name_end, 2);
        assert_eq!(token.bracket, None);
    }

    #[test]
    fn test_extract_closing_tag() {
        let token = extract(&doc("</div"), 5).unwrap();
        assert_eq!(token.name, "div");
        assert!(token.is_closing);
    }

    #[test]
    fn test_extract_stops_name_at_attributes() {
        let token = extract(&doc("<a href=\"\">"), 10).unwrap();
        assert_eq!(token.name, "a");
        assert_eq!(token.name_end, 2);
        assert_eq!(token.bracket, Some(10));
    }

    #[test]
    fn test_extract_name_stops_at_caret() {
        let token = extract(&doc("<section"), 4).unwrap();
        assert_eq!(token.name, "sec");
    }

    #[test]
    fn test_extract_rejects_terminated_tag() {
        assert_eq!(extract(&doc("<p>text"), 7), None);
        assert_eq!(extract(&doc("<html>"), 6), None);
    }

    #[test]
    fn test_extract_without_lt() {
        assert_eq!(extract(&doc("plain text"), 5), None);
        assert_eq!(extract(&doc(""), 0), None);
    }

    #[test]
    fn test_extract_rejects_empty_name() {
        assert_eq!(extract(&doc("<"), 1), None);
        assert_eq!(extract(&doc("</"), 2), None);
        assert_eq!(extract(&doc("< p"), 3), None);
        assert_eq!(extract(&doc("<!DOCTYPE html"), 14), None);
    }

    #[test]
    fn test_extract_clamps_caret() {
        let token = extract(&doc("<br"), 40).unwrap();
        assert_eq!(token.name, "br");
    }

    #[test]
    fn test_extract_keeps_hyphenated_names() {
        let token = extract(&doc("<my-element x"), 13).unwrap();
        assert_eq!(token.name, "my-element");
    }

    #[test]
    fn test_next_tag_sequence() {
        let d = doc("x <b class='y'>t</b>");
        let first = next_tag(&d, 0).unwrap();
        assert_eq!(first.name, "b");
        assert_eq!(first.start, 2);
        assert_eq!(first.bracket, Some(14));

        let second = next_tag(&d, first.end()).unwrap();
        assert_eq!(second.name, "b");
        assert!(second.is_closing);
        assert_eq!(second.end(), d.len_chars());

        assert_eq!(next_tag(&d, second.end()), None);
    }

    #[test]
    fn test_next_tag_self_closing_marker() {
        let token = next_tag(&doc("<img src=x />"), 0).unwrap();
        assert!(token.is_self_closing);
        let token = next_tag(&doc("<div>"), 0).unwrap();
        assert!(!token.is_self_closing);
    }

    #[test]
    fn test_next_tag_skips_quoted_bracket() {
        let token = next_tag(&doc("<a title=\"x>y\">"), 0).unwrap();
        assert_eq!(token.bracket, Some(14));
    }

    #[test]
    fn test_next_tag_unterminated() {
        let d = doc("<p <div>");
        let first = next_tag(&d, 0).unwrap();
        assert_eq!(first.name, "p");
        assert_eq!(first.bracket, None);
        assert_eq!(first.end(), 2);
        assert_eq!(next_tag(&d, first.end()).unwrap().name, "div");
    }

    #[test]
    fn test_next_tag_passes_over_non_tags() {
        let token = next_tag(&doc("a < b <!-- c --> <em>"), 0).unwrap();
        assert_eq!(token.name, "em");
    }

    #[test]
    fn test_valid_names() {
        assert!(is_valid_name("h1"));
        assert!(is_valid_name("x-foo"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("a b"));
        assert!(!is_valid_name("é"));
    }

    #[test]
    fn test_closing_text() {
        let token = extract(&doc("<span"), 5).unwrap();
        assert_eq!(token.closing_text(), "</span>");
    }
}
