use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that repeatedly applies a parser until the end of input.
///
/// Unlike `many`, a failure before the end of input is an error: this is
/// for top-level parsers where the whole source must be consumed.
pub struct All<P> {
    parser: P,
}

impl<P> All<P> {
    pub fn new(parser: P) -> Self {
        All { parser }
    }
}

impl<'src, P> Parser<'src> for All<P>
where
    P: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, mut cursor: Cursor<'src>) -> ParseResult<'src, Self::Output> {
        let mut results = Vec::new();

        while !cursor.at_end() {
            let (value, next_cursor) = self.parser.parse(cursor)?;
            results.push(value);
            cursor = next_cursor;
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create an All parser
pub fn all<'src, P>(parser: P) -> All<P>
where
    P: Parser<'src>,
{
    All::new(parser)
}
