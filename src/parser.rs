use crate::cursor::Cursor;
use crate::error::ParseError;

/// Outcome of a parse attempt: the parsed value and the cursor past the
/// consumed span, or a failure
pub type ParseResult<'src, T> = Result<(T, Cursor<'src>), ParseError>;

/// Core trait for parser combinators
pub trait Parser<'src> {
    type Output;

    /// Attempt to parse from the given cursor position.
    ///
    /// Returns the parsed value and the updated cursor on success. Failures
    /// do not consume input; callers may retry an alternative from the same
    /// cursor unless the failure is marked non-backtrackable.
    fn parse(&self, cursor: Cursor<'src>) -> ParseResult<'src, Self::Output>;
}

/// A heap-allocated, type-erased parser, for combinators that hold a
/// uniform collection of parsers (`one_of`, `sequence`, the Pratt engine)
pub type BoxedParser<'src, O> = Box<dyn Parser<'src, Output = O> + 'src>;

impl<'src, O> Parser<'src> for BoxedParser<'src, O> {
    type Output = O;

    fn parse(&self, cursor: Cursor<'src>) -> ParseResult<'src, O> {
        (**self).parse(cursor)
    }
}

/// Extension trait to erase a parser's concrete type
pub trait BoxedExt<'src>: Parser<'src> + Sized + 'src {
    fn boxed(self) -> BoxedParser<'src, Self::Output> {
        Box::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<'src, P> BoxedExt<'src> for P where P: Parser<'src> + 'src {}

/// Parser built directly from a function `(cursor) -> outcome`
pub struct FnParser<F> {
    f: F,
}

impl<'src, F, O> Parser<'src> for FnParser<F>
where
    F: Fn(Cursor<'src>) -> ParseResult<'src, O>,
{
    type Output = O;

    fn parse(&self, cursor: Cursor<'src>) -> ParseResult<'src, O> {
        (self.f)(cursor)
    }
}

/// Wrap a function `(cursor) -> outcome` as a parser
pub fn from_fn<'src, F, O>(f: F) -> FnParser<F>
where
    F: Fn(Cursor<'src>) -> ParseResult<'src, O>,
{
    FnParser { f }
}
