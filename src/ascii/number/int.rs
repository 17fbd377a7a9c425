use super::float::number;
use super::text::match_integer;
use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Largest magnitude at which every integer is exactly representable in an
/// IEEE double (2^53 - 1)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Parser that matches only the signed-integer portion of a number.
///
/// This is greedy up to the integer part only: given `"123.456"` it
/// matches `"123"` and leaves `".456"` unconsumed. Use `int` to reject
/// such input outright instead.
pub fn integer_part<'src>() -> impl Parser<'src, Output = &'src str> {
    IntegerPart
}

struct IntegerPart;

impl<'src> Parser<'src> for IntegerPart {
    type Output = &'src str;

    fn parse(&self, cursor: Cursor<'src>) -> ParseResult<'src, &'src str> {
        let end = match_integer(cursor)?;
        Ok((cursor.slice_to(end), end))
    }
}

/// Parser that matches a number and requires it to be a safe integer.
///
/// Unlike `integer_part`, this consumes through the full number grammar and
/// then verifies: `"123.1415"` fails entirely rather than matching the
/// integer prefix.
pub fn int<'src>() -> impl Parser<'src, Output = i64> {
    Int
}

struct Int;

impl<'src> Parser<'src> for Int {
    type Output = i64;

    fn parse(&self, cursor: Cursor<'src>) -> ParseResult<'src, i64> {
        let (value, next) = number().parse(cursor)?;

        if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
            Ok((value as i64, next))
        } else {
            Err(ParseError::expected(
                format!("Expected an integer but got \"{value}\" instead"),
                cursor.source(),
                cursor.position(),
            ))
        }
    }
}
