//! Whole-range and property-based checks across formatting and parsing.

use proptest::prelude::*;

use super::*;
use crate::error::NumeralError;

#[test]
fn round_trip_full_range() {
    for n in MIN_VALUE..=MAX_VALUE {
        let numeral = to_roman(n).unwrap();
        assert_eq!(to_number(&numeral), Ok(n as u32), "{n} -> {numeral}");
    }
}

#[test]
fn formatted_numerals_are_valid() {
    for n in MIN_VALUE..=MAX_VALUE {
        let numeral = to_roman(n).unwrap();
        assert!(is_valid(&numeral), "{n} -> {numeral} failed grammar");
    }
}

#[test]
fn formatting_is_injective() {
    let mut seen = std::collections::HashSet::new();
    for n in MIN_VALUE..=MAX_VALUE {
        assert!(seen.insert(to_roman(n).unwrap()));
    }
}

#[test]
fn explain_agrees_with_to_number() {
    for n in (MIN_VALUE..=MAX_VALUE).step_by(7) {
        let numeral = to_roman(n).unwrap();
        let r = explain(&numeral).unwrap();
        assert_eq!(r.value, n as u32);
        assert_eq!(r.groups.iter().map(|g| g.numeral.as_str()).collect::<String>(), numeral);
    }
}

#[test]
fn shared_state_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|t| {
            std::thread::spawn(move || {
                for n in (1 + t..=MAX_VALUE).step_by(4) {
                    let numeral = to_roman(n).unwrap();
                    assert_eq!(to_number(&numeral), Ok(n as u32));
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
}

fn arb_padding() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec![' ', '\t', '\n']), 0..3)
        .prop_map(|v| v.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn lowercase_and_padding_tolerated(
        n in MIN_VALUE..=MAX_VALUE,
        lead in arb_padding(),
        trail in arb_padding(),
    ) {
        let numeral = to_roman(n).unwrap();
        let messy = format!("{lead}{}{trail}", numeral.to_lowercase());
        prop_assert_eq!(to_number(&messy), Ok(n as u32));
        if !lead.is_empty() || !trail.is_empty() {
            prop_assert!(!is_valid(&messy));
        }
    }

    #[test]
    fn out_of_range_rejected(n in prop_oneof![i64::MIN..MIN_VALUE, (MAX_VALUE + 1)..i64::MAX]) {
        prop_assert_eq!(to_roman(n), Err(NumeralError::OutOfRange(n)));
    }

    #[test]
    fn fractional_rejected(x in -10_000.0f64..10_000.0) {
        prop_assert!(matches!(to_roman(x), Err(NumeralError::NotInteger(_))));
    }

    #[test]
    fn parse_agrees_with_grammar(s in "[IVXLCDM]{1,12}") {
        match to_number(&s) {
            Ok(v) => {
                prop_assert!(is_valid(&s));
                prop_assert_eq!(to_roman(i64::from(v)).unwrap(), s);
            }
            Err(e) => {
                prop_assert!(!is_valid(&s));
                prop_assert_eq!(e, NumeralError::InvalidNumeral(s.clone()));
            }
        }
    }

    #[test]
    fn arbitrary_text_never_panics(s in "\\PC{0,16}") {
        let valid = is_valid(&s);
        if let Ok(v) = to_number(&s) {
            prop_assert!((1..=4999).contains(&v));
        } else {
            prop_assert!(!valid || s.is_empty());
        }
    }
}
