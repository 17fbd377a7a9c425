use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that matches an exact literal at the current offset and returns
/// the matched slice of the source
pub struct Exact {
    literal: Cow<'static, str>,
}

impl Exact {
    pub fn new(literal: impl Into<Cow<'static, str>>) -> Self {
        Exact {
            literal: literal.into(),
        }
    }
}

impl<'src> Parser<'src> for Exact {
    type Output = &'src str;

    fn parse(&self, cursor: Cursor<'src>) -> ParseResult<'src, &'src str> {
        let rest = cursor.rest();
        if rest.starts_with(self.literal.as_ref()) {
            let end = cursor.advance(self.literal.len());
            Ok((cursor.slice_to(end), end))
        } else {
            // The mismatched slice may be shorter than the literal near the
            // end of input
            let got: String = rest.chars().take(self.literal.chars().count()).collect();
            Err(ParseError::expected(
                format!("Expected \"{}\" but got \"{}\" instead", self.literal, got),
                cursor.source(),
                cursor.position(),
            ))
        }
    }
}

/// Convenience function to create an Exact parser
pub fn exact(literal: impl Into<Cow<'static, str>>) -> Exact {
    Exact::new(literal)
}
