use crate::numeral::{MAX_VALUE, MIN_VALUE};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NumeralError {
    #[error("non-integers cannot be converted: {0}")]
    NotInteger(String),
    #[error("valid numbers are {min} to {max}, got {0}", min = MIN_VALUE, max = MAX_VALUE)]
    OutOfRange(i64),
    #[error("invalid Roman numeral: {0:?}")]
    InvalidNumeral(String),
    /// A grammar-conformant token had no table entry. Never caused by input.
    #[error("numeral token {0:?} missing from value table")]
    TableMismatch(String),
}

impl NumeralError {
    /// True for errors caused by the caller's input, false for internal faults.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, NumeralError::TableMismatch(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            NumeralError::OutOfRange(5000).to_string(),
            "valid numbers are 1 to 4999, got 5000"
        );
        assert_eq!(
            NumeralError::NotInteger("12.5".into()).to_string(),
            "non-integers cannot be converted: 12.5"
        );
        assert_eq!(
            NumeralError::InvalidNumeral("hello".into()).to_string(),
            "invalid Roman numeral: \"hello\""
        );
    }

    #[test]
    fn input_errors() {
        assert!(NumeralError::OutOfRange(0).is_input_error());
        assert!(NumeralError::NotInteger("x".into()).is_input_error());
        assert!(NumeralError::InvalidNumeral(String::new()).is_input_error());
        assert!(!NumeralError::TableMismatch("IIII".into()).is_input_error());
    }
}
