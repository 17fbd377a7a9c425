use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that matches zero or more occurrences of the given parser.
///
/// The repetition normally succeeds with whatever was collected so far, but
/// a non-backtrackable terminating failure fails the whole repetition: a
/// committed branch inside an element must not be silently discarded.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'src, P> Parser<'src> for Many<P>
where
    P: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, mut cursor: Cursor<'src>) -> ParseResult<'src, Self::Output> {
        let mut results = Vec::new();

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

/// Convenience function to create a Many parser
pub fn many<'src, P>(parser: P) -> Many<P>
where
    P: Parser<'src>,
{
    Many::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditional::conditional;
    use crate::exact::exact;

    #[test]
    fn test_many_zero_matches() {
        let parser = many(exact("a"));

        let (results, cursor) = parser.parse(Cursor::new("xyz")).unwrap();
        assert!(results.is_empty());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_many_one_match() {
        let parser = many(exact("a"));

        let (results, cursor) = parser.parse(Cursor::new("abc")).unwrap();
        assert_eq!(results, vec!["a"]);
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_many_multiple_matches() {
        let parser = many(exact("a"));

        let (results, cursor) = parser.parse(Cursor::new("aaabcd")).unwrap();
        assert_eq!(results, vec!["a", "a", "a"]);
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_many_all_matches() {
        let parser = many(exact("ab"));

        let (results, cursor) = parser.parse(Cursor::new("abab")).unwrap();
        assert_eq!(results, vec!["ab", "ab"]);
        assert!(cursor.at_end());
    }

    #[test]
    fn test_many_empty_input() {
        let parser = many(exact("a"));

        let (results, cursor) = parser.parse(Cursor::new("")).unwrap();
        assert!(results.is_empty());
        assert!(cursor.at_end());
    }

    #[test]
    fn test_many_committed_failure_fails_repetition() {
        // Each element is "a" committed to a following "b"; the third
        // element matches "a" then dies inside the committed branch
        let parser = many(conditional(exact("a"), exact("b")));

        let error = parser.parse(Cursor::new("ababax")).unwrap_err();
        assert!(!error.is_backtrackable());
        assert!(error.message().contains("Expected \"b\""));
    }
}
