//! Property-based tests for the Delta codec.
//!
//! These tests verify that the fixed-width invariants hold across arbitrary
//! well-formed codes, using the `proptest` crate for random test case
//! generation.

use milsym_sidc::{decode_delta, encode_delta, SymbolIdCode};
use proptest::prelude::*;

// =============================================================================
// Generators
// =============================================================================

/// Generates a syntactically well-formed 20-character code.
fn arb_full_code() -> impl Strategy<Value = String> {
    "[0-9]{20}"
}

/// Generates a short code: symbol set + entity.
fn arb_short_code() -> impl Strategy<Value = String> {
    "[0-9]{8}"
}

/// Generates a string that is neither 8 nor 20 characters long.
fn arb_bad_length_code() -> impl Strategy<Value = String> {
    "[0-9]{0,30}".prop_filter("length must not be 8 or 20", |code| {
        code.len() != 8 && code.len() != 20
    })
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Decoding then encoding a well-formed code returns the same code.
    #[test]
    fn prop_decode_encode_round_trip(code in arb_full_code()) {
        let symbol = decode_delta(&code).unwrap();
        prop_assert_eq!(encode_delta(&symbol), code);
    }

    /// A code is valid exactly when its symbol set is not "00".
    #[test]
    fn prop_valid_iff_symbol_set_assigned(code in arb_full_code()) {
        let symbol = decode_delta(&code).unwrap();
        prop_assert_eq!(symbol.is_valid(), &code[4..6] != "00");
    }

    /// Expanding a short code keeps symbol set and entity and always yields
    /// 20 characters.
    #[test]
    fn prop_short_code_expands_to_full_width(code in arb_short_code()) {
        let symbol = SymbolIdCode::expand_short(&code).unwrap();
        let full = symbol.full_code();
        prop_assert_eq!(full.len(), 20);
        prop_assert_eq!(&full[4..6], &code[0..2]);
        prop_assert_eq!(&full[10..16], &code[2..8]);
        prop_assert_eq!(symbol.short_code(), code);
    }

    /// Setters pad short values and ignore values wider than the field.
    #[test]
    fn prop_setters_keep_fixed_width(value in "[0-9]{0,8}") {
        let mut symbol = SymbolIdCode::new();
        let before = symbol.entity_code().to_string();
        symbol.set_entity_code(&value);

        if value.len() > 6 {
            prop_assert_eq!(symbol.entity_code(), before);
        } else {
            prop_assert_eq!(symbol.entity_code(), format!("{:0>6}", value));
        }
        prop_assert_eq!(symbol.full_code().len(), 20);
    }

    /// Only 8- and 20-character codes parse.
    #[test]
    fn prop_other_lengths_are_rejected(code in arb_bad_length_code()) {
        prop_assert!(SymbolIdCode::parse(&code).is_err());
    }
}
