use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser that matches zero or more ASCII whitespace characters (space,
/// tab, newline, carriage return, form feed). It cannot fail; with no
/// whitespace at the offset it succeeds with an empty slice.
pub fn spaces<'src>() -> impl Parser<'src, Output = &'src str> {
    Spaces
}

struct Spaces;

impl<'src> Parser<'src> for Spaces {
    type Output = &'src str;

    fn parse(&self, cursor: Cursor<'src>) -> ParseResult<'src, &'src str> {
        let mut end = cursor;
        while let Some(c) = end.peek() {
            if !c.is_ascii_whitespace() {
                break;
            }
            end = end.advance(c.len_utf8());
        }

        Ok((cursor.slice_to(end), end))
    }
}
