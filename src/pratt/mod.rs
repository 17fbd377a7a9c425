pub mod operator;

pub use operator::{BinaryOperator, UnaryOperator};

use crate::cursor::Cursor;
use crate::fail::fail;
use crate::parser::{BoxedExt, BoxedParser, ParseResult, Parser};

type ApplyPrefix<'src, S, T> = Box<dyn Fn(S, T) -> T + 'src>;
type ApplyInfix<'src, S, T> = Box<dyn Fn(T, S, T) -> T + 'src>;
type ApplyPostfix<'src, S, T> = Box<dyn Fn(T, S) -> T + 'src>;

/// Operator-precedence expression parser driven by binding powers.
///
/// A `Pratt` parser is configured with a leaf parser for atomic operands
/// and, optionally, prefix/infix/postfix operator parsers plus their
/// accumulation functions and a scope (bracket) pair. Unset slots default
/// to `fail(...)` placeholders, so an unconfigured operator category simply
/// never matches.
///
/// Precedence and associativity live entirely in the binding powers the
/// grammar supplies (see [`BinaryOperator`]); the engine compares them
/// against the ambient minimum while recursing for right operands. A scope
/// pair resets the ambient minimum to zero for its contents.
///
/// Operator parsers are expected to consume their own surrounding
/// whitespace; the engine never skips input on its own.
pub struct Pratt<'src, T, S> {
    left: BoxedParser<'src, T>,
    prefix: BoxedParser<'src, UnaryOperator<S>>,
    infix: BoxedParser<'src, BinaryOperator<S>>,
    postfix: BoxedParser<'src, UnaryOperator<S>>,
    scope_begin: BoxedParser<'src, ()>,
    scope_end: BoxedParser<'src, ()>,
    apply_prefix: ApplyPrefix<'src, S, T>,
    apply_infix: ApplyInfix<'src, S, T>,
    apply_postfix: ApplyPostfix<'src, S, T>,
}

impl<'src, T: 'src, S: 'src> Pratt<'src, T, S> {
    /// Create an expression parser with the given leaf (operand) parser
    pub fn new(left: impl Parser<'src, Output = T> + 'src) -> Self {
        Pratt {
            left: left.boxed(),
            prefix: fail("No prefix operator parser provided").boxed(),
            infix: fail("No infix operator parser provided").boxed(),
            postfix: fail("No postfix operator parser provided").boxed(),
            scope_begin: fail("No scope begin parser provided").boxed(),
            scope_end: fail("No scope end parser provided").boxed(),
            apply_prefix: Box::new(|_, operand| operand),
            apply_infix: Box::new(|left, _, _| left),
            apply_postfix: Box::new(|operand, _| operand),
        }
    }

    /// Set the prefix operator parser and its accumulation function
    pub fn prefix(
        mut self,
        parser: impl Parser<'src, Output = UnaryOperator<S>> + 'src,
        apply: impl Fn(S, T) -> T + 'src,
    ) -> Self {
        self.prefix = parser.boxed();
        self.apply_prefix = Box::new(apply);
        self
    }

    /// Set the infix operator parser and its accumulation function
    pub fn infix(
        mut self,
        parser: impl Parser<'src, Output = BinaryOperator<S>> + 'src,
        apply: impl Fn(T, S, T) -> T + 'src,
    ) -> Self {
        self.infix = parser.boxed();
        self.apply_infix = Box::new(apply);
        self
    }

    /// Set the postfix operator parser and its accumulation function
    pub fn postfix(
        mut self,
        parser: impl Parser<'src, Output = UnaryOperator<S>> + 'src,
        apply: impl Fn(T, S) -> T + 'src,
    ) -> Self {
        self.postfix = parser.boxed();
        self.apply_postfix = Box::new(apply);
        self
    }

    /// Set the scope (bracket) parsers. A scope resets the ambient binding
    /// power to zero for the sub-expression between begin and end.
    pub fn scope(
        mut self,
        begin: impl Parser<'src, Output = ()> + 'src,
        end: impl Parser<'src, Output = ()> + 'src,
    ) -> Self {
        self.scope_begin = begin.boxed();
        self.scope_end = end.boxed();
        self
    }

    fn expr(&self, cursor: Cursor<'src>, min_binding_power: u32) -> ParseResult<'src, T> {
        // A prefix operator, a scoped sub-expression, or a plain leaf
        let (mut full, mut cursor) = match self.prefix.parse(cursor) {
            Ok((op, next)) => {
                let (operand, next) = self.expr(next, op.binding_power)?;
                ((self.apply_prefix)(op.symbol, operand), next)
            }
            Err(error) if !error.is_backtrackable() => return Err(error),
            Err(_) => match self.scope_begin.parse(cursor) {
                Ok((_, next)) => {
                    let (inner, next) = self.expr(next, 0)?;
                    let (_, next) = self.scope_end.parse(next)?;
                    (inner, next)
                }
                Err(error) if !error.is_backtrackable() => return Err(error),
                Err(_) => self.left.parse(cursor)?,
            },
        };

        while !cursor.at_end() {
            // A postfix operator binds the accumulator if it is strong
            // enough; a weaker one belongs to an enclosing call
            match self.postfix.parse(cursor) {
                Ok((op, next)) => {
                    if op.binding_power < min_binding_power {
                        break;
                    }
                    full = (self.apply_postfix)(full, op.symbol);
                    cursor = next;
                    continue;
                }
                Err(error) if !error.is_backtrackable() => return Err(error),
                Err(_) => {}
            }

            // A scope end is consumed by the enclosing scope branch
            match self.scope_end.parse(cursor) {
                Ok(_) => break,
                Err(error) if !error.is_backtrackable() => return Err(error),
                Err(_) => {}
            }

            // Anything else must be an infix operator
            let (op, next) = self.infix.parse(cursor)?;
            let (left_bp, right_bp) = op.binding_power;
            if left_bp < min_binding_power {
                break;
            }
            let (right, next) = self.expr(next, right_bp)?;
            full = (self.apply_infix)(full, op.symbol, right);
            cursor = next;
        }

        Ok((full, cursor))
    }
}

impl<'src, T: 'src, S: 'src> Parser<'src> for Pratt<'src, T, S> {
    type Output = T;

    fn parse(&self, cursor: Cursor<'src>) -> ParseResult<'src, T> {
        self.expr(cursor, 0)
    }
}

/// Convenience function to create a Pratt expression parser
pub fn pratt<'src, T: 'src, S: 'src>(left: impl Parser<'src, Output = T> + 'src) -> Pratt<'src, T, S> {
    Pratt::new(left)
}
