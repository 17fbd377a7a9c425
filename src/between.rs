use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser that matches content between opening and closing delimiters.
///
/// Parses `open + content + close` and returns just the content value with
/// the delimiters discarded. Whitespace is not handled automatically.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"(value)"` → `"value"`
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(open: P1, content: P2, close: P3) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<'src, P1, P2, P3> Parser<'src> for Between<P1, P2, P3>
where
    P1: Parser<'src>,
    P2: Parser<'src>,
    P3: Parser<'src>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: Cursor<'src>) -> ParseResult<'src, Self::Output> {
        let (_, cursor) = self.open.parse(cursor)?;
        let (content_value, cursor) = self.content.parse(cursor)?;
        let (_, cursor) = self.close.parse(cursor)?;

        Ok((content_value, cursor))
    }
}

/// Convenience function to create a Between parser
pub fn between<'src, P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3>
where
    P1: Parser<'src>,
    P2: Parser<'src>,
    P3: Parser<'src>,
{
    Between::new(open, content, close)
}
