use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{BoxedParser, ParseResult, Parser};

/// Parser combinator that tries each parser at the original offset, in
/// order, and returns the first success.
///
/// A non-backtrackable failure stops the scan immediately and is surfaced
/// without trying the remaining alternatives. If every parser fails, the
/// last failure is returned; with an empty list the combinator fails with
/// `No parsers provided`.
pub struct OneOf<'src, O> {
    parsers: Vec<BoxedParser<'src, O>>,
}

impl<'src, O> OneOf<'src, O> {
    pub fn new(parsers: Vec<BoxedParser<'src, O>>) -> Self {
        OneOf { parsers }
    }
}

impl<'src, O> Parser<'src> for OneOf<'src, O> {
    type Output = O;

    fn parse(&self, cursor: Cursor<'src>) -> ParseResult<'src, O> {
        let mut last_error = None;

        for parser in &self.parsers {
            match parser.parse(cursor) {
                Ok(result) => return Ok(result),
                Err(error) if !error.is_backtrackable() => return Err(error),
                Err(error) => last_error = Some(error),
            }
        }

        Err(last_error.unwrap_or_else(|| ParseError::bare("No parsers provided")))
    }
}

/// Convenience function to create a OneOf parser
pub fn one_of<'src, O>(parsers: Vec<BoxedParser<'src, O>>) -> OneOf<'src, O> {
    OneOf::new(parsers)
}
