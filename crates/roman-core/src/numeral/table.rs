use std::collections::HashMap;
use std::sync::OnceLock;

/// Smallest value [`to_roman`](super::to_roman) accepts.
pub const MIN_VALUE: i64 = 1;
/// Largest value [`to_roman`](super::to_roman) accepts (`MMMMCMXCIX`).
pub const MAX_VALUE: i64 = 4999;

/// Base letters, subtractive pairs, and the repeated-letter runs the
/// tokenizer can produce.
const ENTRIES: &[(&str, u32)] = &[
    ("I", 1),
    ("II", 2),
    ("III", 3),
    ("IV", 4),
    ("V", 5),
    ("IX", 9),
    ("X", 10),
    ("XX", 20),
    ("XXX", 30),
    ("XL", 40),
    ("L", 50),
    ("XC", 90),
    ("C", 100),
    ("CC", 200),
    ("CCC", 300),
    ("CD", 400),
    ("D", 500),
    ("CM", 900),
    ("M", 1000),
    ("MM", 2000),
    ("MMM", 3000),
    ("MMMM", 4000),
];

/// Symbol-group to value lookup, plus the same entries ordered by value
/// descending for greedy formatting.
pub struct NumeralTable {
    values: HashMap<&'static str, u32>,
    ordered: Vec<(u32, &'static str)>,
}

impl NumeralTable {
    /// Get or initialize the global table.
    pub fn global() -> &'static NumeralTable {
        static INSTANCE: OnceLock<NumeralTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let values = ENTRIES.iter().copied().collect();
            let mut ordered: Vec<(u32, &'static str)> =
                ENTRIES.iter().map(|&(numeral, value)| (value, numeral)).collect();
            // sort_by is stable
            ordered.sort_by(|a, b| b.0.cmp(&a.0));
            NumeralTable { values, ordered }
        })
    }

    pub fn value(&self, group: &str) -> Option<u32> {
        self.values.get(group).copied()
    }

    /// Like [`value`](Self::value), but also returns the table's own key.
    pub fn entry(&self, group: &str) -> Option<(&'static str, u32)> {
        self.values.get_key_value(group).map(|(&k, &v)| (k, v))
    }

    /// All entries, largest value first.
    pub fn ordered(&self) -> &[(u32, &'static str)] {
        &self.ordered
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
