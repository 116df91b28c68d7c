use std::process;

use serde::Serialize;

use roman_core::numeral::{explain, format_text};
use roman_core::{is_valid, to_number, to_roman, Number, NumeralError};

use crate::settings::OutputFormat;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Debug, Serialize)]
struct RomanOutput<'a> {
    input: String,
    numeral: &'a str,
}

#[derive(Debug, Serialize)]
struct NumberOutput<'a> {
    input: &'a str,
    value: u32,
}

#[derive(Debug, Serialize)]
struct ValidOutput<'a> {
    input: &'a str,
    valid: bool,
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).expect("JSON serialization failed")
}

pub fn render_to_roman(
    number: Number,
    format: OutputFormat,
    lowercase: bool,
) -> Result<String, NumeralError> {
    let input = number.to_string();
    let mut numeral = to_roman(number)?;
    if lowercase {
        numeral.make_ascii_lowercase();
    }
    Ok(match format {
        OutputFormat::Text => numeral,
        OutputFormat::Json => to_json(&RomanOutput {
            input,
            numeral: &numeral,
        }),
    })
}

pub fn render_to_number(text: &str, format: OutputFormat) -> Result<String, NumeralError> {
    let value = to_number(text)?;
    Ok(match format {
        OutputFormat::Text => value.to_string(),
        OutputFormat::Json => to_json(&NumberOutput { input: text, value }),
    })
}

pub fn render_is_valid(text: &str, format: OutputFormat) -> String {
    let valid = is_valid(text);
    match format {
        OutputFormat::Text => valid.to_string(),
        OutputFormat::Json => to_json(&ValidOutput { input: text, valid }),
    }
}

pub fn render_explain(text: &str, format: OutputFormat) -> Result<String, NumeralError> {
    let result = explain(text)?;
    Ok(match format {
        OutputFormat::Text => format_text(&result),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(&result).expect("JSON serialization failed");
            json.push('\n');
            json
        }
    })
}

pub fn to_roman_cmd(number: Number, format: OutputFormat, lowercase: bool) {
    let out = die!(render_to_roman(number, format, lowercase), "Error: {}");
    println!("{out}");
}

pub fn to_number_cmd(text: &str, format: OutputFormat) {
    let out = die!(render_to_number(text, format), "Error: {}");
    println!("{out}");
}

pub fn is_valid_cmd(text: &str, format: OutputFormat) {
    println!("{}", render_is_valid(text, format));
}

pub fn explain_cmd(text: &str, format: OutputFormat) {
    let out = die!(render_explain(text, format), "Error: {}");
    print!("{out}");
}
