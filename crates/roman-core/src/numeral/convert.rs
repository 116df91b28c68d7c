use tracing::{debug, debug_span};

use crate::error::NumeralError;
use crate::number::Number;

use super::explain::{ExplainGroup, ExplainToken, Place};
use super::grammar::NumeralGrammar;
use super::table::{NumeralTable, MAX_VALUE, MIN_VALUE};

/// Format an integer in 1..=4999 as a canonical Roman numeral.
///
/// Floats and non-numeric values fail with [`NumeralError::NotInteger`] even
/// when they hold a whole value; integers outside the range fail with
/// [`NumeralError::OutOfRange`].
pub fn to_roman(number: impl Into<Number>) -> Result<String, NumeralError> {
    let number = number.into();
    let _span = debug_span!("to_roman", %number).entered();

    let mut remaining = match number {
        Number::Integer(n) if (MIN_VALUE..=MAX_VALUE).contains(&n) => n as u32,
        Number::Integer(n) => return Err(NumeralError::OutOfRange(n)),
        other => return Err(NumeralError::NotInteger(other.to_string())),
    };

    let mut out = String::new();
    for &(value, numeral) in NumeralTable::global().ordered() {
        while value <= remaining {
            out.push_str(numeral);
            remaining -= value;
        }
        if remaining == 0 {
            break;
        }
    }

    debug!(numeral = %out, "formatted");
    Ok(out)
}

/// Exact, case-sensitive grammar check. No trimming; `""` is valid.
pub fn is_valid(text: &str) -> bool {
    NumeralGrammar::global().is_match(text)
}

/// Parse a Roman numeral, ignoring case and surrounding whitespace.
///
/// Unlike [`is_valid`], an empty (or all-whitespace) string is rejected.
pub fn to_number(text: &str) -> Result<u32, NumeralError> {
    let _span = debug_span!("to_number", text).entered();
    let numeral = normalize(text)?;
    let value = decompose(&numeral)?.iter().map(|g| g.value).sum();
    debug!(value, "parsed");
    Ok(value)
}

/// Trim and uppercase, then require a non-empty grammar match.
pub(crate) fn normalize(text: &str) -> Result<String, NumeralError> {
    let numeral = text.trim().to_uppercase();
    if numeral.is_empty() || !is_valid(&numeral) {
        return Err(NumeralError::InvalidNumeral(text.to_string()));
    }
    Ok(numeral)
}

/// Tokenize each non-empty place group of a validated numeral.
pub(crate) fn decompose(numeral: &str) -> Result<Vec<ExplainGroup>, NumeralError> {
    let grammar = NumeralGrammar::global();
    let table = NumeralTable::global();
    let groups = grammar
        .groups(numeral)
        .ok_or_else(|| NumeralError::InvalidNumeral(numeral.to_string()))?;

    let mut out = Vec::new();
    for (place, group) in Place::ALL.into_iter().zip(groups) {
        if group.is_empty() {
            continue;
        }
        let tokens = grammar
            .tokens(group)
            .into_iter()
            .map(|t| {
                table
                    .entry(t)
                    .map(|(numeral, value)| ExplainToken { numeral, value })
                    .ok_or_else(|| NumeralError::TableMismatch(t.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        out.push(ExplainGroup {
            place,
            numeral: group.to_string(),
            value: tokens.iter().map(|t| t.value).sum(),
            tokens,
        });
    }
    Ok(out)
}
