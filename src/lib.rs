//! # Prattle - Parser Combinators with Operator Precedence
//!
//! A parser combinator library for string input, with an operator-precedence
//! expression engine built on top of the same combinators.
//!
//! Prattle provides composable, type-safe parsers that combine into complex
//! parsing logic from simple building blocks. The library emphasizes:
//!
//! - **Failures as values**: every mismatch is an ordinary `Result`, never a
//!   panic, so alternation can inspect and retry
//! - **Rich diagnostics**: failures carry a fully rendered line/column
//!   header with a source excerpt and caret
//! - **Committed branches**: `conditional` marks a branch's downstream
//!   failures non-backtrackable, so `or`/`one_of` surface the precise error
//!   instead of a misleading sibling failure
//! - **Operator precedence as data**: the `pratt` engine drives prefix,
//!   infix, postfix and scoped forms purely from binding powers

pub mod all;
pub mod and;
pub mod ascii;
pub mod between;
pub mod conditional;
pub mod cursor;
pub mod error;
pub mod exact;
pub mod fail;
pub mod filter;
pub mod lazy;
pub mod many;
pub mod map;
pub mod map_err;
pub mod maybe;
pub mod one_of;
pub mod optional;
pub mod or;
pub mod parser;
pub mod position;
pub mod pratt;
pub mod separated_list;
pub mod sequence;
pub mod some;
pub mod succeed;

pub use cursor::Cursor;
pub use error::ParseError;
pub use exact::exact;
pub use fail::fail;
pub use parser::{BoxedExt, BoxedParser, ParseResult, Parser, from_fn};
pub use position::{LineCol, line_col};
pub use pratt::{BinaryOperator, Pratt, UnaryOperator, pratt};
pub use succeed::succeed;
