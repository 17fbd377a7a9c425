use super::class::{Run, Single};
use crate::parser::Parser;

/// Parser that matches a single ASCII letter or digit
pub fn single_alpha_num<'src>() -> impl Parser<'src, Output = char> {
    Single::new("an alphanumeric character", |c| c.is_ascii_alphanumeric())
}

/// Parser that greedily matches one or more ASCII letters or digits
pub fn alpha_num<'src>() -> impl Parser<'src, Output = &'src str> {
    Run::new("an alphanumeric character", |c| c.is_ascii_alphanumeric())
}
