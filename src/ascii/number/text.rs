use crate::ascii::class::class_error;
use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Consume an optional sign followed by either a lone `0` or a run of
/// digits that does not start with `0`, returning the cursor past the
/// integer portion
pub(crate) fn match_integer<'src>(cursor: Cursor<'src>) -> Result<Cursor<'src>, ParseError> {
    let mut cur = cursor;
    if matches!(cur.peek(), Some('+') | Some('-')) {
        cur = cur.advance(1);
    }

    match cur.peek() {
        // No leading-zero extension: "01234" stops after the "0"
        Some('0') => Ok(cur.advance(1)),
        Some(c) if c.is_ascii_digit() => {
            let mut end = cur.advance(1);
            while end.peek().is_some_and(|c| c.is_ascii_digit()) {
                end = end.advance(1);
            }
            Ok(end)
        }
        _ => Err(class_error("a number", cur)),
    }
}

/// Parser that matches the text of a number: an optional sign, an integer
/// part without leading-zero extension, and an optional fraction.
///
/// The fraction is only consumed when the dot is followed by at least one
/// digit, so `"123."` matches `"123"` and leaves the dot unconsumed.
pub fn number_string<'src>() -> impl Parser<'src, Output = &'src str> {
    NumberString
}

struct NumberString;

impl<'src> Parser<'src> for NumberString {
    type Output = &'src str;

    fn parse(&self, cursor: Cursor<'src>) -> ParseResult<'src, &'src str> {
        let mut end = match_integer(cursor)?;

        if end.peek() == Some('.') {
            let mut frac = end.advance(1);
            if frac.peek().is_some_and(|c| c.is_ascii_digit()) {
                while frac.peek().is_some_and(|c| c.is_ascii_digit()) {
                    frac = frac.advance(1);
                }
                end = frac;
            }
        }

        Ok((cursor.slice_to(end), end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer() {
        let parser = number_string();

        let (text, cursor) = parser.parse(Cursor::new("120abc")).unwrap();
        assert_eq!(text, "120");
        assert_eq!(cursor.rest(), "abc");
    }

    #[test]
    fn test_fraction() {
        let parser = number_string();

        let (text, cursor) = parser.parse(Cursor::new("0.14159")).unwrap();
        assert_eq!(text, "0.14159");
        assert!(cursor.at_end());
    }

    #[test]
    fn test_signed() {
        let parser = number_string();

        let (text, _) = parser.parse(Cursor::new("-42.5")).unwrap();
        assert_eq!(text, "-42.5");

        let (text, _) = parser.parse(Cursor::new("+7")).unwrap();
        assert_eq!(text, "+7");
    }

    #[test]
    fn test_no_leading_zero_extension() {
        let parser = number_string();

        let (text, cursor) = parser.parse(Cursor::new("01234")).unwrap();
        assert_eq!(text, "0");
        assert_eq!(cursor.rest(), "1234");
    }

    #[test]
    fn test_bare_dot_fails() {
        let parser = number_string();

        let error = parser.parse(Cursor::new(".14159")).unwrap_err();
        assert!(error.message().contains("Expected a number but got \".\" instead"));
    }

    #[test]
    fn test_dot_without_digits_left_unconsumed() {
        let parser = number_string();

        let (text, cursor) = parser.parse(Cursor::new("123.")).unwrap();
        assert_eq!(text, "123");
        assert_eq!(cursor.rest(), ".");
    }

    #[test]
    fn test_empty_input_fails() {
        let parser = number_string();

        let error = parser.parse(Cursor::new("")).unwrap_err();
        assert!(error.message().contains("Expected a number but got \"\" instead"));
    }

    #[test]
    fn test_sign_without_digits_fails() {
        let parser = number_string();

        let error = parser.parse(Cursor::new("-x")).unwrap_err();
        assert!(error.message().contains("Expected a number but got \"x\" instead"));
    }
}
