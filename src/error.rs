use crate::position::annotate;
use thiserror::Error;

/// A parse failure.
///
/// The message is fully rendered (line, column, source excerpt, caret) by
/// the primitive that produced it, so combinators can forward it without
/// needing the source text. `backtrackable` tells alternation and
/// repetition combinators whether they may silently try another branch or
/// must surface this failure immediately.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    message: String,
    backtrackable: bool,
}

impl ParseError {
    /// A failure at an offset in the source, rendered with position context
    pub fn expected(description: impl AsRef<str>, source: &str, offset: usize) -> Self {
        ParseError {
            message: annotate(description.as_ref(), source, offset),
            backtrackable: true,
        }
    }

    /// A failure carrying the message verbatim, with no position context
    pub fn bare(message: impl Into<String>) -> Self {
        ParseError {
            message: message.into(),
            backtrackable: true,
        }
    }

    /// Mark this failure as non-backtrackable, so `or`/`one_of` surface it
    /// instead of trying later alternatives
    pub fn committed(mut self) -> Self {
        self.backtrackable = false;
        self
    }

    /// Whether alternation combinators may try another branch after this failure
    pub fn is_backtrackable(&self) -> bool {
        self.backtrackable
    }

    /// The rendered diagnostic text
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Transform the message, keeping the backtrack flag
    pub(crate) fn map_message(self, f: impl FnOnce(String) -> String) -> Self {
        ParseError {
            message: f(self.message),
            backtrackable: self.backtrackable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_renders_position() {
        let error = ParseError::expected("Expected \"d\" but got \"f\" instead", "abcfg", 3);

        assert!(error.message().contains("Error at (line: 1, column: 4)"));
        assert!(error.message().contains("Expected \"d\" but got \"f\" instead"));
        assert!(error.is_backtrackable());
    }

    #[test]
    fn test_bare_is_verbatim() {
        let error = ParseError::bare("No parsers provided");
        assert_eq!(error.message(), "No parsers provided");
        assert!(error.is_backtrackable());
    }

    #[test]
    fn test_committed_flips_flag() {
        let error = ParseError::bare("boom").committed();
        assert!(!error.is_backtrackable());
        // The message is untouched
        assert_eq!(error.message(), "boom");
    }

    #[test]
    fn test_display_is_message() {
        let error = ParseError::expected("Expected \"x\" but got \"y\" instead", "y", 0);
        assert_eq!(format!("{}", error), error.message());
    }

    #[test]
    fn test_map_message_keeps_flag() {
        let error = ParseError::bare("inner").committed();
        let error = error.map_message(|m| format!("outer: {m}"));

        assert_eq!(error.message(), "outer: inner");
        assert!(!error.is_backtrackable());
    }
}
