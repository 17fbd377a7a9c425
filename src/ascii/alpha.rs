use super::class::{Run, Single};
use crate::parser::Parser;

/// Parser that matches a single ASCII letter (A-Z, a-z)
pub fn single_alpha<'src>() -> impl Parser<'src, Output = char> {
    Single::new("an alphabetic character", |c| c.is_ascii_alphabetic())
}

/// Parser that greedily matches one or more ASCII letters
pub fn alpha<'src>() -> impl Parser<'src, Output = &'src str> {
    Run::new("an alphabetic character", |c| c.is_ascii_alphabetic())
}

/// Parser that matches a single uppercase ASCII letter (A-Z)
pub fn single_upper<'src>() -> impl Parser<'src, Output = char> {
    Single::new("an uppercase letter", |c| c.is_ascii_uppercase())
}

/// Parser that greedily matches one or more uppercase ASCII letters
pub fn upper<'src>() -> impl Parser<'src, Output = &'src str> {
    Run::new("an uppercase letter", |c| c.is_ascii_uppercase())
}

/// Parser that matches a single lowercase ASCII letter (a-z)
pub fn single_lower<'src>() -> impl Parser<'src, Output = char> {
    Single::new("a lowercase letter", |c| c.is_ascii_lowercase())
}

/// Parser that greedily matches one or more lowercase ASCII letters
pub fn lower<'src>() -> impl Parser<'src, Output = &'src str> {
    Run::new("a lowercase letter", |c| c.is_ascii_lowercase())
}
