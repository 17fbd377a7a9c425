use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser that always succeeds with the given value without consuming input.
///
/// Used as the fallback leaf of default-value combinators, not as a
/// general-purpose parser.
pub struct Succeed<T> {
    value: T,
}

impl<T> Succeed<T> {
    pub fn new(value: T) -> Self {
        Succeed { value }
    }
}

impl<'src, T> Parser<'src> for Succeed<T>
where
    T: Clone,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'src>) -> ParseResult<'src, T> {
        Ok((self.value.clone(), cursor))
    }
}

/// Convenience function to create a Succeed parser
pub fn succeed<T>(value: T) -> Succeed<T>
where
    T: Clone,
{
    Succeed::new(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_succeed_returns_value() {
        let parser = succeed(42);

        let (value, cursor) = parser.parse(Cursor::new("anything")).unwrap();
        assert_eq!(value, 42);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_succeed_consumes_nothing_mid_input() {
        let parser = succeed("default");

        let (value, cursor) = parser.parse(Cursor::at("abcdef", 3)).unwrap();
        assert_eq!(value, "default");
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_succeed_on_empty_input() {
        let parser = succeed(true);

        let (value, cursor) = parser.parse(Cursor::new("")).unwrap();
        assert!(value);
        assert!(cursor.at_end());
    }

    #[test]
    fn test_succeed_is_reusable() {
        let parser = succeed(7);

        let (a, _) = parser.parse(Cursor::new("x")).unwrap();
        let (b, _) = parser.parse(Cursor::new("y")).unwrap();
        assert_eq!(a, 7);
        assert_eq!(b, 7);
    }
}
