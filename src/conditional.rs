use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that commits to a branch once its antecedent matches.
///
/// The antecedent's failure propagates unchanged, so enclosing alternation
/// may still try other branches. Once the antecedent succeeds, a failure of
/// the consequent is marked non-backtrackable: `or`/`one_of` surface it
/// instead of silently falling through to a sibling alternative and
/// reporting a misleadingly-located error.
pub struct Conditional<P1, P2> {
    antecedent: P1,
    consequent: P2,
}

impl<P1, P2> Conditional<P1, P2> {
    pub fn new(antecedent: P1, consequent: P2) -> Self {
        Conditional {
            antecedent,
            consequent,
        }
    }
}

impl<'src, P1, P2> Parser<'src> for Conditional<P1, P2>
where
    P1: Parser<'src>,
    P2: Parser<'src>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: Cursor<'src>) -> ParseResult<'src, Self::Output> {
        let (first, cursor) = self.antecedent.parse(cursor)?;

        match self.consequent.parse(cursor) {
            Ok((second, cursor)) => Ok(((first, second), cursor)),
            Err(error) => Err(error.committed()),
        }
    }
}

/// Convenience function to create a Conditional parser
pub fn conditional<'src, P1, P2>(antecedent: P1, consequent: P2) -> Conditional<P1, P2>
where
    P1: Parser<'src>,
    P2: Parser<'src>,
{
    Conditional::new(antecedent, consequent)
}
