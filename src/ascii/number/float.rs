use super::text::number_string;
use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser that matches a number and converts the matched text to `f64`
pub fn number<'src>() -> impl Parser<'src, Output = f64> {
    Number
}

struct Number;

impl<'src> Parser<'src> for Number {
    type Output = f64;

    fn parse(&self, cursor: Cursor<'src>) -> ParseResult<'src, f64> {
        let (text, next) = number_string().parse(cursor)?;

        match text.parse::<f64>() {
            Ok(value) => Ok((value, next)),
            Err(_) => Err(ParseError::expected(
                format!("Expected a number but got \"{text}\" instead"),
                cursor.source(),
                cursor.position(),
            )),
        }
    }
}
