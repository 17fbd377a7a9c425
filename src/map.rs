use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that transforms the output of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'src, P, F, T, U> Parser<'src> for Map<P, F>
where
    P: Parser<'src, Output = T>,
    F: Fn(T) -> U,
{
    type Output = U;

    fn parse(&self, cursor: Cursor<'src>) -> ParseResult<'src, U> {
        let (value, cursor) = self.parser.parse(cursor)?;
        let mapped_value = (self.mapper)(value);
        Ok((mapped_value, cursor))
    }
}

/// Convenience function to create a Map parser
pub fn map<'src, P, F, T, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'src, Output = T>,
    F: Fn(T) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'src>: Parser<'src> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'src, P> MapExt<'src> for P where P: Parser<'src> {}
