//! Closer configuration.

use super::token::is_valid_name;
use crate::error::{Error, Result};

/// Options controlling closing-tag completion.
///
/// The defaults give plain HTML behaviour.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CloserOptions {
    /// Names treated as void elements in addition to the built-in set.
    pub extra_void_elements: Vec<String>,
    /// Complete a tag when `>` is typed right after the `>` that already
    /// terminates it, e.g. `<html>|` becomes `<html>|</html>`.
    pub complete_after_bracket: bool,
    /// Match closing tags ignoring ASCII case, so `</DIV>` closes `<div`.
    /// Names compare exactly by default.
    pub ignore_case: bool,
}

impl CloserOptions {
    /// Create default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a void element name.
    pub fn with_void_element(mut self, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(Error::InvalidTagName(name));
        }
        self.extra_void_elements.push(name);
        Ok(self)
    }

    /// Enable or disable completion after an existing bracket.
    #[must_use]
    pub fn with_complete_after_bracket(mut self, enabled: bool) -> Self {
        self.complete_after_bracket = enabled;
        self
    }

    /// Enable or disable case-insensitive name matching.
    #[must_use]
    pub fn with_ignore_case(mut self, enabled: bool) -> Self {
        self.ignore_case = enabled;
        self
    }

    /// Compare two tag names under these options.
    #[must_use]
    pub fn names_match(&self, a: &str, b: &str) -> bool {
        if self.ignore_case {
            a.eq_ignore_ascii_case(b)
        } else {
            a == b
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = CloserOptions::new();
        assert!(options.extra_void_elements.is_empty());
        assert!(!options.complete_after_bracket);
        assert!(!options.ignore_case);
    }

    #[test]
    fn test_with_void_element_validates() {
        assert_eq!(
            CloserOptions::new().with_void_element("bad name"),
            Err(Error::InvalidTagName("bad name".to_string()))
        );
        assert!(matches!(
            CloserOptions::new().with_void_element(""),
            Err(Error::InvalidTagName(_))
        ));
        let options = CloserOptions::new().with_void_element("spacer").unwrap();
        assert_eq!(options.extra_void_elements, vec!["spacer".to_string()]);
    }

    #[test]
    fn test_names_match() {
        let options = CloserOptions::new();
        assert!(!options.names_match("DIV", "div"));
        assert!(options.names_match("div", "div"));
        let options = options.with_ignore_case(true);
        assert!(options.names_match("DIV", "div"));
    }
}
