pub mod error;
pub mod number;
pub mod numeral;

pub use error::NumeralError;
pub use number::Number;
pub use numeral::{explain, is_valid, to_number, to_roman};
