use super::class::{Run, Single};
use crate::parser::Parser;

/// Parser that matches a single ASCII digit (0-9)
pub fn single_digit<'src>() -> impl Parser<'src, Output = char> {
    Single::new("a digit", |c| c.is_ascii_digit())
}

/// Parser that greedily matches one or more ASCII digits
pub fn digits<'src>() -> impl Parser<'src, Output = &'src str> {
    Run::new("a digit", |c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;

    #[test]
    fn test_single_digit_zero() {
        let parser = single_digit();

        let (d, cursor) = parser.parse(Cursor::new("0abc")).unwrap();
        assert_eq!(d, '0');
        assert_eq!(cursor.rest(), "abc");
    }

    #[test]
    fn test_single_digit_nine() {
        let parser = single_digit();

        let (d, _) = parser.parse(Cursor::new("9xyz")).unwrap();
        assert_eq!(d, '9');
    }

    #[test]
    fn test_single_digit_matches_exactly_one() {
        let parser = single_digit();

        let (d, cursor) = parser.parse(Cursor::new("123")).unwrap();
        assert_eq!(d, '1');
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_single_digit_non_digit_fails() {
        let parser = single_digit();

        let error = parser.parse(Cursor::new("abc")).unwrap_err();
        assert!(error.message().contains("Expected a digit but got \"a\" instead"));
    }

    #[test]
    fn test_digits_run() {
        let parser = digits();

        let (matched, cursor) = parser.parse(Cursor::new("0123abc")).unwrap();
        assert_eq!(matched, "0123");
        assert_eq!(cursor.rest(), "abc");
    }

    #[test]
    fn test_digits_requires_one() {
        let parser = digits();

        let error = parser.parse(Cursor::new("abc")).unwrap_err();
        assert!(error.message().contains("Expected a digit"));
    }

    #[test]
    fn test_digits_empty_input_fails() {
        let parser = digits();

        let error = parser.parse(Cursor::new("")).unwrap_err();
        assert!(error.message().contains("but got \"\" instead"));
    }
}
