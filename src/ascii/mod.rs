pub mod alpha;
pub mod alphanumeric;
mod class;
pub mod digit;
pub mod number;
pub mod whitespace;

pub use alpha::{alpha, lower, single_alpha, single_lower, single_upper, upper};
pub use alphanumeric::{alpha_num, single_alpha_num};
pub use digit::{digits, single_digit};
pub use number::{int, integer_part, number, number_string};
pub use whitespace::spaces;
