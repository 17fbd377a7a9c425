use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Note: chaining multiple `.and()` calls produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples. Rust has no variadic
/// generics, and the nested form keeps the combinator fully general; the
/// destructuring pattern at the use site makes the parsing order explicit.
/// For a homogeneous run of parsers, use `sequence` instead.
///
/// Example:
/// ```
/// use prattle::and::AndExt;
/// use prattle::ascii::number::int;
/// use prattle::exact::exact;
/// use prattle::{Cursor, Parser};
///
/// let parser = int().and(exact(":")).and(int());
/// let (((hours, _), minutes), _) = parser.parse(Cursor::new("9:30")).unwrap();
/// assert_eq!(hours, 9);
/// assert_eq!(minutes, 30);
/// ```
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'src, P1, P2> Parser<'src> for And<P1, P2>
where
    P1: Parser<'src>,
    P2: Parser<'src>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: Cursor<'src>) -> ParseResult<'src, Self::Output> {
        let (result1, cursor) = self.parser1.parse(cursor)?;
        let (result2, cursor) = self.parser2.parse(cursor)?;
        Ok(((result1, result2), cursor))
    }
}

/// Convenience function to create an And parser
pub fn and<'src, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'src>,
    P2: Parser<'src>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<'src>: Parser<'src> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'src>,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'src, P> AndExt<'src> for P where P: Parser<'src> {}
