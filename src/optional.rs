use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that falls back to a default value when the given
/// parser fails.
///
/// Always succeeds at the original offset on fallback. A non-backtrackable
/// failure is propagated instead of defaulted: that branch already
/// committed, so its error must surface.
pub struct Optional<P, T> {
    parser: P,
    default: T,
}

impl<P, T> Optional<P, T> {
    pub fn new(parser: P, default: T) -> Self {
        Optional { parser, default }
    }
}

impl<'src, P, T> Parser<'src> for Optional<P, T>
where
    P: Parser<'src, Output = T>,
    T: Clone,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'src>) -> ParseResult<'src, T> {
        match self.parser.parse(cursor) {
            Ok(result) => Ok(result),
            Err(error) if !error.is_backtrackable() => Err(error),
            Err(_) => Ok((self.default.clone(), cursor)),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'src, P, T>(parser: P, default: T) -> Optional<P, T>
where
    P: Parser<'src, Output = T>,
    T: Clone,
{
    Optional::new(parser, default)
}
