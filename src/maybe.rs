use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that wraps the given parser's success in `Some` and
/// turns a backtrackable failure into `None` at the original offset.
///
/// Never fails on its own; a non-backtrackable failure still propagates.
pub struct Maybe<P> {
    parser: P,
}

impl<P> Maybe<P> {
    pub fn new(parser: P) -> Self {
        Maybe { parser }
    }
}

impl<'src, P> Parser<'src> for Maybe<P>
where
    P: Parser<'src>,
{
    type Output = Option<P::Output>;

    fn parse(&self, cursor: Cursor<'src>) -> ParseResult<'src, Self::Output> {
        match self.parser.parse(cursor) {
            Ok((value, cursor)) => Ok((Some(value), cursor)),
            Err(error) if !error.is_backtrackable() => Err(error),
            Err(_) => Ok((None, cursor)),
        }
    }
}

/// Convenience function to create a Maybe parser
pub fn maybe<'src, P>(parser: P) -> Maybe<P>
where
    P: Parser<'src>,
{
    Maybe::new(parser)
}
