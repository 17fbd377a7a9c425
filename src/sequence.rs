use crate::cursor::Cursor;
use crate::parser::{BoxedParser, ParseResult, Parser};

/// Parser combinator that runs each parser in order at the cumulative
/// offset and collects the values.
///
/// The first failure is returned immediately; no partial results are kept.
/// All parsers must share an output type; for heterogeneous sequencing use
/// `.and()` chaining.
pub struct Sequence<'src, O> {
    parsers: Vec<BoxedParser<'src, O>>,
}

impl<'src, O> Sequence<'src, O> {
    pub fn new(parsers: Vec<BoxedParser<'src, O>>) -> Self {
        Sequence { parsers }
    }
}

impl<'src, O> Parser<'src> for Sequence<'src, O> {
    type Output = Vec<O>;

    fn parse(&self, mut cursor: Cursor<'src>) -> ParseResult<'src, Vec<O>> {
        let mut results = Vec::with_capacity(self.parsers.len());

        for parser in &self.parsers {
            let (value, next_cursor) = parser.parse(cursor)?;
            results.push(value);
            cursor = next_cursor;
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a Sequence parser
pub fn sequence<'src, O>(parsers: Vec<BoxedParser<'src, O>>) -> Sequence<'src, O> {
    Sequence::new(parsers)
}
