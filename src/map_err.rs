use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that transforms the failure message of a parser using
/// a mapping function. The backtrack flag is preserved.
pub struct MapErr<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> MapErr<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        MapErr { parser, mapper }
    }
}

impl<'src, P, F> Parser<'src> for MapErr<P, F>
where
    P: Parser<'src>,
    F: Fn(String) -> String,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'src>) -> ParseResult<'src, Self::Output> {
        match self.parser.parse(cursor) {
            Ok(result) => Ok(result),
            Err(error) => Err(error.map_message(&self.mapper)),
        }
    }
}

/// Convenience function to create a MapErr parser
pub fn map_err<'src, P, F>(parser: P, mapper: F) -> MapErr<P, F>
where
    P: Parser<'src>,
    F: Fn(String) -> String,
{
    MapErr::new(parser, mapper)
}

/// Extension trait to add .map_err() method support for parsers
pub trait MapErrExt<'src>: Parser<'src> + Sized {
    fn map_err<F>(self, mapper: F) -> MapErr<Self, F>
    where
        F: Fn(String) -> String,
    {
        MapErr::new(self, mapper)
    }
}

/// Implement MapErrExt for all parsers
impl<'src, P> MapErrExt<'src> for P where P: Parser<'src> {}
