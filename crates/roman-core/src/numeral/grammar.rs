use std::sync::OnceLock;

use regex::Regex;

/// Thousands, hundreds, tens, ones. Every group may be empty.
const NUMERAL_PATTERN: &str = r"^(M{0,4})(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$";

/// Subtractive pairs win over runs of a single letter.
const TOKEN_PATTERN: &str = r"CM|CD|XC|XL|IX|IV|M+|C+|X+|I+|D|L|V";

pub struct NumeralGrammar {
    numeral: Regex,
    token: Regex,
}

impl NumeralGrammar {
    /// Get or initialize the global grammar.
    pub fn global() -> &'static NumeralGrammar {
        static INSTANCE: OnceLock<NumeralGrammar> = OnceLock::new();
        INSTANCE.get_or_init(|| NumeralGrammar {
            numeral: Regex::new(NUMERAL_PATTERN).expect("numeral pattern must compile"),
            token: Regex::new(TOKEN_PATTERN).expect("token pattern must compile"),
        })
    }

    /// Whole-string, case-sensitive match.
    pub fn is_match(&self, text: &str) -> bool {
        self.numeral.is_match(text)
    }

    /// Split a numeral into its thousands/hundreds/tens/ones groups.
    pub fn groups<'t>(&self, text: &'t str) -> Option<[&'t str; 4]> {
        let caps = self.numeral.captures(text)?;
        Some([1, 2, 3, 4].map(|i| caps.get(i).map_or("", |m| m.as_str())))
    }

    /// Split one group into table tokens, e.g. `DCCC` into `D`, `CCC`.
    pub fn tokens<'t>(&self, group: &'t str) -> Vec<&'t str> {
        self.token.find_iter(group).map(|m| m.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed() {
        let g = NumeralGrammar::global();
        for s in ["I", "IV", "IX", "XIV", "XL", "MCMLXXXIV", "MMMMCMXCIX", "DCCC"] {
            assert!(g.is_match(s), "{s} should match");
        }
    }

    #[test]
    fn rejects_malformed() {
        let g = NumeralGrammar::global();
        for s in ["IIII", "VV", "IC", "MMMMM", "XM", "hello", "iv", " IV", "IV ", "VX"] {
            assert!(!g.is_match(s), "{s} should not match");
        }
    }

    #[test]
    fn empty_matches() {
        assert!(NumeralGrammar::global().is_match(""));
    }

    #[test]
    fn groups_split_by_place() {
        let g = NumeralGrammar::global();
        assert_eq!(g.groups("MCMLXXXIV"), Some(["M", "CM", "LXXX", "IV"]));
        assert_eq!(g.groups("MMXX"), Some(["MM", "", "XX", ""]));
        assert_eq!(g.groups("V"), Some(["", "", "", "V"]));
        assert_eq!(g.groups("IIII"), None);
    }

    #[test]
    fn tokens_prefer_pairs() {
        let g = NumeralGrammar::global();
        assert_eq!(g.tokens("CM"), vec!["CM"]);
        assert_eq!(g.tokens("DCCC"), vec!["D", "CCC"]);
        assert_eq!(g.tokens("LXXX"), vec!["L", "XXX"]);
        assert_eq!(g.tokens("VIII"), vec!["V", "III"]);
        assert_eq!(g.tokens("MMMM"), vec!["MMMM"]);
        assert!(g.tokens("").is_empty());
    }
}
