use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that tries the first parser, and if it fails, tries
/// the second parser at the same offset.
///
/// A non-backtrackable failure from the first parser is surfaced
/// immediately without trying the second: once a branch has committed via
/// `conditional`, its error must not be masked by a sibling alternative.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'src, P1, P2, O> Parser<'src> for Or<P1, P2>
where
    P1: Parser<'src, Output = O>,
    P2: Parser<'src, Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: Cursor<'src>) -> ParseResult<'src, O> {
        match self.parser1.parse(cursor) {
            Ok(result) => Ok(result),
            Err(error) if !error.is_backtrackable() => Err(error),
            Err(_) => self.parser2.parse(cursor),
        }
    }
}

/// Convenience function to create an Or parser
pub fn or<'src, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'src, Output = O>,
    P2: Parser<'src, Output = O>,
{
    Or::new(parser1, parser2)
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'src>: Parser<'src> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'src, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'src, P> OrExt<'src> for P where P: Parser<'src> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditional::conditional;
    use crate::exact::exact;
    use crate::map::MapExt;

    #[test]
    fn test_or_first_succeeds() {
        let parser = or(exact("a"), exact("b"));

        let (value, cursor) = parser.parse(Cursor::new("abc")).unwrap();
        assert_eq!(value, "a");
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_or_second_succeeds() {
        let parser = or(exact("a"), exact("b"));

        let (value, cursor) = parser.parse(Cursor::new("bcd")).unwrap();
        assert_eq!(value, "b");
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_or_both_fail_returns_last_error() {
        let parser = or(exact("a"), exact("b"));

        let error = parser.parse(Cursor::new("xyz")).unwrap_err();
        assert!(error.message().contains("Expected \"b\""));
    }

    #[test]
    fn test_or_retries_at_original_offset() {
        // Both alternatives share a prefix; the second must be retried from
        // the start, not from where the first died
        let parser = or(exact("abx"), exact("abc"));

        let (value, _) = parser.parse(Cursor::new("abc")).unwrap();
        assert_eq!(value, "abc");
    }

    #[test]
    fn test_or_committed_failure_not_masked() {
        let committed = conditional(exact("a"), exact("b")).map(|(a, _)| a);
        let parser = or(committed, exact("ax"));

        // "ax" would match the second alternative, but the first branch
        // committed after matching "a", so its failure must surface
        let error = parser.parse(Cursor::new("ax")).unwrap_err();
        assert!(!error.is_backtrackable());
        assert!(error.message().contains("Expected \"b\""));
    }

    #[test]
    fn test_or_method_chain() {
        let parser = exact("a").or(exact("b")).or(exact("c"));

        let (value, cursor) = parser.parse(Cursor::new("c")).unwrap();
        assert_eq!(value, "c");
        assert!(cursor.at_end());
    }
}
