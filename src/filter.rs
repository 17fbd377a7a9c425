use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that applies a predicate function to validate the output of
/// another parser.
///
/// On predicate failure the error is positioned at the offset where the
/// rejected value began, with the given description.
pub struct Filter<P, F> {
    parser: P,
    predicate: F,
    description: Cow<'static, str>,
}

impl<P, F> Filter<P, F> {
    pub fn new(parser: P, predicate: F, description: Cow<'static, str>) -> Self {
        Filter {
            parser,
            predicate,
            description,
        }
    }
}

impl<'src, P, F, T> Parser<'src> for Filter<P, F>
where
    P: Parser<'src, Output = T>,
    F: Fn(&T) -> bool,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'src>) -> ParseResult<'src, T> {
        let (value, new_cursor) = self.parser.parse(cursor)?;

        if (self.predicate)(&value) {
            Ok((value, new_cursor))
        } else {
            Err(ParseError::expected(
                self.description.as_ref(),
                cursor.source(),
                cursor.position(),
            ))
        }
    }
}

/// Convenience function to create a Filter parser
pub fn filter<'src, P, F>(
    parser: P,
    predicate: F,
    description: impl Into<Cow<'static, str>>,
) -> Filter<P, F>
where
    P: Parser<'src>,
    F: Fn(&P::Output) -> bool,
{
    Filter::new(parser, predicate, description.into())
}

/// Extension trait to add .filter() method support for parsers
pub trait FilterExt<'src>: Parser<'src> + Sized {
    fn filter<F>(self, predicate: F, description: impl Into<Cow<'static, str>>) -> Filter<Self, F>
    where
        F: Fn(&Self::Output) -> bool,
    {
        Filter::new(self, predicate, description.into())
    }
}

/// Implement FilterExt for all parsers
impl<'src, P> FilterExt<'src> for P where P: Parser<'src> {}
