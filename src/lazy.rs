use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};
use std::marker::PhantomData;

/// A lazy parser that defers the construction of the actual parser until
/// parse time. This is useful for breaking self- or mutual recursion
/// between parsers.
pub struct Lazy<'src, F, P>
where
    F: Fn() -> P,
    P: Parser<'src>,
{
    factory: F,
    _phantom: PhantomData<&'src ()>,
}

impl<'src, F, P> Lazy<'src, F, P>
where
    F: Fn() -> P,
    P: Parser<'src>,
{
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            _phantom: PhantomData,
        }
    }
}

impl<'src, F, P> Parser<'src> for Lazy<'src, F, P>
where
    F: Fn() -> P,
    P: Parser<'src>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'src>) -> ParseResult<'src, Self::Output> {
        let parser = (self.factory)();
        parser.parse(cursor)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'src, F, P>(factory: F) -> Lazy<'src, F, P>
where
    F: Fn() -> P,
    P: Parser<'src>,
{
    Lazy::new(factory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exact::exact;
    use crate::many::many;
    use crate::map::MapExt;
    use crate::or::OrExt;
    use crate::parser::{BoxedExt, BoxedParser};

    #[test]
    fn test_lazy_basic() {
        let parser = lazy(|| exact("a"));

        let (value, cursor) = parser.parse(Cursor::new("aaaa")).unwrap();
        assert_eq!(value, "a");
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_lazy_with_many() {
        let parser = lazy(|| many(exact("a")));

        let (values, cursor) = parser.parse(Cursor::new("aaaa")).unwrap();
        assert_eq!(values.len(), 4);
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn test_lazy_deferred_construction() {
        // The factory runs per parse call, not at definition time
        let parser = lazy(|| exact("x"));

        let (value, _) = parser.parse(Cursor::new("xyz")).unwrap();
        assert_eq!(value, "x");
    }

    // A self-recursive grammar: nested ::= "()" | "(" nested ")"
    fn nested<'src>() -> BoxedParser<'src, usize> {
        use crate::and::AndExt;
        exact("()")
            .map(|_| 1)
            .or(exact("(")
                .and(lazy(nested))
                .and(exact(")"))
                .map(|((_, depth), _)| depth + 1))
            .boxed()
    }

    #[test]
    fn test_lazy_recursive_grammar() {
        let parser = nested();

        let (depth, cursor) = parser.parse(Cursor::new("((()))")).unwrap();
        assert_eq!(depth, 3);
        assert!(cursor.at_end());
    }
}
