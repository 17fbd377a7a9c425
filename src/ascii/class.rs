use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// The failure every class matcher reports: the expectation description and
/// the character found at the offset (empty at end of input)
pub(crate) fn class_error(description: &str, cursor: Cursor<'_>) -> ParseError {
    let got = cursor.peek().map(String::from).unwrap_or_default();
    ParseError::expected(
        format!("Expected {description} but got \"{got}\" instead"),
        cursor.source(),
        cursor.position(),
    )
}

/// Parser that matches exactly one character satisfying the predicate
pub(crate) struct Single {
    description: &'static str,
    predicate: fn(char) -> bool,
}

impl Single {
    pub(crate) fn new(description: &'static str, predicate: fn(char) -> bool) -> Self {
        Single {
            description,
            predicate,
        }
    }
}

impl<'src> Parser<'src> for Single {
    type Output = char;

    fn parse(&self, cursor: Cursor<'src>) -> ParseResult<'src, char> {
        match cursor.peek() {
            Some(c) if (self.predicate)(c) => Ok((c, cursor.advance(c.len_utf8()))),
            _ => Err(class_error(self.description, cursor)),
        }
    }
}

/// Parser that greedily matches one or more characters satisfying the
/// predicate and returns the matched slice
pub(crate) struct Run {
    description: &'static str,
    predicate: fn(char) -> bool,
}

impl Run {
    pub(crate) fn new(description: &'static str, predicate: fn(char) -> bool) -> Self {
        Run {
            description,
            predicate,
        }
    }
}

impl<'src> Parser<'src> for Run {
    type Output = &'src str;

    fn parse(&self, cursor: Cursor<'src>) -> ParseResult<'src, &'src str> {
        let mut end = cursor;
        while let Some(c) = end.peek() {
            if !(self.predicate)(c) {
                break;
            }
            end = end.advance(c.len_utf8());
        }

        if end.position() == cursor.position() {
            Err(class_error(self.description, cursor))
        } else {
            Ok((cursor.slice_to(end), end))
        }
    }
}
