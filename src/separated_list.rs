use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that matches a list of items separated by a separator
/// parser.
///
/// Parses at least one item, followed by zero or more occurrences of
/// (separator + item), and returns all items.
///
/// # Note
/// - Requires at least one element
/// - A trailing separator is not consumed: after a matched separator the
///   next item is required, so `"a,b,"` fails at the end
/// - Does not handle whitespace automatically
pub struct SeparatedList<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> SeparatedList<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SeparatedList { parser, separator }
    }
}

impl<'src, P, PS> Parser<'src> for SeparatedList<P, PS>
where
    P: Parser<'src>,
    PS: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'src>) -> ParseResult<'src, Self::Output> {
        let mut results = Vec::new();

        // Parse the first element (required)
        let (first_value, mut cursor) = self.parser.parse(cursor)?;
        results.push(first_value);

        loop {
            let after_separator = match self.separator.parse(cursor) {
                Ok((_, next_cursor)) => next_cursor,
                Err(error) if !error.is_backtrackable() => return Err(error),
                Err(_) => break,
            };

            // A separator commits us to another element
            let (value, next_cursor) = self.parser.parse(after_separator)?;
            results.push(value);
            cursor = next_cursor;
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a SeparatedList parser
pub fn separated_list<'src, P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser<'src>,
    PS: Parser<'src>,
{
    SeparatedList::new(parser, separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::number::int;
    use crate::exact::exact;

    #[test]
    fn test_single_element() {
        let parser = separated_list(int(), exact(","));

        let (values, cursor) = parser.parse(Cursor::new("7")).unwrap();
        assert_eq!(values, vec![7]);
        assert!(cursor.at_end());
    }

    #[test]
    fn test_multiple_elements() {
        let parser = separated_list(int(), exact(","));

        let (values, cursor) = parser.parse(Cursor::new("1,2,3")).unwrap();
        assert_eq!(values, vec![1, 2, 3]);
        assert!(cursor.at_end());
    }

    #[test]
    fn test_no_elements_fails() {
        let parser = separated_list(int(), exact(","));

        assert!(parser.parse(Cursor::new("")).is_err());
        assert!(parser.parse(Cursor::new("abc")).is_err());
    }

    #[test]
    fn test_trailing_separator_fails() {
        let parser = separated_list(int(), exact(","));

        let error = parser.parse(Cursor::new("1,2,")).unwrap_err();
        assert!(error.message().contains("Expected a number"));
    }

    #[test]
    fn test_stops_before_other_content() {
        let parser = separated_list(int(), exact(","));

        let (values, cursor) = parser.parse(Cursor::new("1,2;3")).unwrap();
        assert_eq!(values, vec![1, 2]);
        assert_eq!(cursor.rest(), ";3");
    }
}
