pub mod float;
pub mod int;
pub mod text;

pub use float::number;
pub use int::{int, integer_part};
pub use text::number_string;
