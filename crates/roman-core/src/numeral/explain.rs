use std::fmt::Write as _;

use serde::Serialize;

use crate::error::NumeralError;

use super::convert::{decompose, normalize};

/// Decimal place a numeral group encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Place {
    Thousands,
    Hundreds,
    Tens,
    Ones,
}

impl Place {
    /// Grammar group order.
    pub const ALL: [Place; 4] = [Place::Thousands, Place::Hundreds, Place::Tens, Place::Ones];

    pub fn name(self) -> &'static str {
        match self {
            Place::Thousands => "thousands",
            Place::Hundreds => "hundreds",
            Place::Tens => "tens",
            Place::Ones => "ones",
        }
    }
}

/// Full breakdown of a single numeral.
#[derive(Debug, Serialize)]
pub struct ExplainResult {
    /// Text as given by the caller.
    pub input: String,
    /// Trimmed, uppercased numeral.
    pub numeral: String,
    pub groups: Vec<ExplainGroup>,
    pub value: u32,
}

/// One non-empty place group.
#[derive(Debug, Serialize)]
pub struct ExplainGroup {
    pub place: Place,
    pub numeral: String,
    pub tokens: Vec<ExplainToken>,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplainToken {
    pub numeral: &'static str,
    pub value: u32,
}

/// Break a numeral into place groups and table tokens.
///
/// Accepts the same inputs as [`to_number`](super::to_number) and always
/// agrees with it on the total.
pub fn explain(text: &str) -> Result<ExplainResult, NumeralError> {
    let numeral = normalize(text)?;
    let groups = decompose(&numeral)?;
    let value = groups.iter().map(|g| g.value).sum();
    Ok(ExplainResult {
        input: text.to_string(),
        numeral,
        groups,
        value,
    })
}

pub fn format_text(result: &ExplainResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {} = {} ===", result.numeral, result.value);
    for g in &result.groups {
        let tokens: Vec<String> = g
            .tokens
            .iter()
            .map(|t| format!("{}={}", t.numeral, t.value))
            .collect();
        let _ = writeln!(
            out,
            "  {:<10} {:<6} {:>5}  [{}]",
            g.place.name(),
            g.numeral,
            g.value,
            tokens.join(" + "),
        );
    }
    out
}
