use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that always fails with the given message, verbatim.
///
/// No position context is attached. This is the placeholder default for
/// conditionally-absent parsers, such as unset operator slots in the
/// expression engine.
pub struct Fail<T> {
    message: Cow<'static, str>,
    _phantom: PhantomData<T>,
}

impl<T> Fail<T> {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Fail {
            message: message.into(),
            _phantom: PhantomData,
        }
    }
}

impl<'src, T> Parser<'src> for Fail<T> {
    type Output = T;

    fn parse(&self, _cursor: Cursor<'src>) -> ParseResult<'src, T> {
        Err(ParseError::bare(self.message.clone()))
    }
}

/// Convenience function to create a Fail parser
pub fn fail<T>(message: impl Into<Cow<'static, str>>) -> Fail<T> {
    Fail::new(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fail_message_is_verbatim() {
        let parser = fail::<()>("nothing to see here");

        let error = parser.parse(Cursor::new("abc")).unwrap_err();
        assert_eq!(error.message(), "nothing to see here");
    }

    #[test]
    fn test_fail_is_backtrackable() {
        let parser = fail::<i64>("placeholder");

        let error = parser.parse(Cursor::new("123")).unwrap_err();
        assert!(error.is_backtrackable());
    }

    #[test]
    fn test_fail_on_any_input() {
        let parser = fail::<char>("always fails");

        assert!(parser.parse(Cursor::new("")).is_err());
        assert!(parser.parse(Cursor::at("xyz", 2)).is_err());
    }
}
