//! Roman numeral formatting, parsing and validation.
//!
//! A fixed value table drives greedy formatting; a regex grammar splits a
//! numeral into thousands/hundreds/tens/ones groups, which are tokenized and
//! summed against the same table. Both are built once and shared read-only.

mod convert;
pub mod explain;
mod grammar;
mod table;

pub use convert::{is_valid, to_number, to_roman};
pub use explain::{explain, format_text, ExplainGroup, ExplainResult, ExplainToken, Place};
pub use grammar::NumeralGrammar;
pub use table::{NumeralTable, MAX_VALUE, MIN_VALUE};

#[cfg(test)]
mod tests;
