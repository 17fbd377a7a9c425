use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that matches one or more occurrences of the given parser.
///
/// The first attempt must succeed; its failure becomes the combinator's
/// failure. After that the repetition behaves like `many`, including
/// failing outright on a non-backtrackable terminating failure.
pub struct Some<P> {
    parser: P,
}

impl<P> Some<P> {
    pub fn new(parser: P) -> Self {
        Some { parser }
    }
}

impl<'src, P> Parser<'src> for Some<P>
where
    P: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'src>) -> ParseResult<'src, Self::Output> {
        let mut results = Vec::new();

        // First parse must succeed
        let (first_value, mut cursor) = self.parser.parse(cursor)?;
        results.push(first_value);

        loop {
            match self.parser.parse(cursor) {
                Ok((value, next_cursor)) => {
                    results.push(value);
                    cursor = next_cursor;
                }
                Err(error) if !error.is_backtrackable() => return Err(error),
                Err(_) => break,
            }
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a Some parser
pub fn some<'src, P>(parser: P) -> Some<P>
where
    P: Parser<'src>,
{
    Some::new(parser)
}
