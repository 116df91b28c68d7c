//! Numeric input accepted by [`to_roman`](crate::numeral::to_roman).
//!
//! Keeps the integer/non-integer distinction of the caller's value so that
//! `12.5` (or `12.0`) is rejected as a non-integer rather than truncated.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
    /// Text that is not a number at all.
    NonNumeric(String),
}

impl Number {
    /// Classify command-line style text.
    ///
    /// Integer literals that overflow `i64` saturate, so they still report as
    /// out of range instead of as non-integers.
    pub fn parse(text: &str) -> Number {
        let s = text.trim();
        if is_integer_literal(s) {
            let saturated = if s.starts_with('-') { i64::MIN } else { i64::MAX };
            return Number::Integer(s.parse().unwrap_or(saturated));
        }
        match s.parse::<f64>() {
            Ok(f) => Number::Float(f),
            Err(_) => Number::NonNumeric(text.to_string()),
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match *self {
            Number::Integer(n) => Some(n),
            _ => None,
        }
    }
}

/// Optional sign followed by one or more ASCII digits.
fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for Number {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Number::parse(s))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(n) => write!(f, "{n}"),
            Number::Float(x) => write!(f, "{x:?}"),
            Number::NonNumeric(s) => write!(f, "{s:?}"),
        }
    }
}

macro_rules! from_lossless {
    ($($t:ty),*) => {
        $(impl From<$t> for Number {
            fn from(n: $t) -> Self {
                Number::Integer(i64::from(n))
            }
        })*
    };
}

macro_rules! from_saturating {
    ($($t:ty),*) => {
        $(impl From<$t> for Number {
            fn from(n: $t) -> Self {
                Number::Integer(i64::try_from(n).unwrap_or(i64::MAX))
            }
        })*
    };
}

from_lossless!(i8, i16, i32, i64, u8, u16, u32);
from_saturating!(u64, usize);

impl From<isize> for Number {
    fn from(n: isize) -> Self {
        Number::Integer(n as i64)
    }
}

impl From<f32> for Number {
    fn from(x: f32) -> Self {
        Number::Float(f64::from(x))
    }
}

impl From<f64> for Number {
    fn from(x: f64) -> Self {
        Number::Float(x)
    }
}
