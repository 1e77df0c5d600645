//! # Property Tests
//!
//! Invariants that must hold for every input, not just the fixtures.

use proptest::prelude::*;
use sophone_core::{
    format_international_safe, format_local_safe, get_operator_info_safe, get_operator_safe,
    get_wallet_info_safe, get_wallet_safe, is_valid_mobile, normalize_e164, normalize_e164_safe,
    to_nsn, validate, MOBILE_PREFIXES,
};

/// A valid NSN: known prefix plus seven digits.
fn valid_nsn() -> impl Strategy<Value = String> {
    (prop::sample::select(MOBILE_PREFIXES), "[0-9]{7}")
        .prop_map(|(prefix, rest)| format!("{prefix}{rest}"))
}

/// Inputs that look like phone numbers in the ways people type them.
fn phone_like() -> impl Strategy<Value = String> {
    prop_oneof![
        "\\+?(00)?(252)?0?[0-9 ()-]{0,14}",
        valid_nsn().prop_map(|n| format!("0{n}")),
        valid_nsn().prop_map(|n| format!("+252 {n}")),
        ".*",
    ]
}

proptest! {
    #[test]
    fn boolean_check_agrees_with_validate(input in phone_like()) {
        prop_assert_eq!(is_valid_mobile(input.as_str()), validate(input.as_str()).is_ok());
    }

    #[test]
    fn e164_round_trip(nsn in valid_nsn()) {
        let e164 = normalize_e164(nsn.as_str()).unwrap();
        prop_assert_eq!(&e164, &format!("+252{nsn}"));
        prop_assert_eq!(to_nsn(e164.as_str()), nsn.clone());

        let local = format_local_safe(nsn.as_str()).unwrap();
        prop_assert_eq!(normalize_e164(local.as_str()).unwrap(), e164.clone());

        let international = format_international_safe(nsn.as_str()).unwrap();
        prop_assert_eq!(normalize_e164(international.as_str()).unwrap(), e164);
    }

    #[test]
    fn reduction_is_idempotent_on_valid_nsn(nsn in valid_nsn()) {
        prop_assert_eq!(to_nsn(nsn.as_str()), nsn.clone());
        prop_assert_eq!(to_nsn(to_nsn(nsn.as_str()).as_str()), nsn);
    }

    #[test]
    fn valid_numbers_always_resolve_an_operator(nsn in valid_nsn()) {
        prop_assert!(get_operator_safe(nsn.as_str()).is_some());
        prop_assert!(get_operator_info_safe(nsn.as_str()).is_some());
        prop_assert_eq!(
            get_wallet_safe(nsn.as_str()).is_some(),
            get_wallet_info_safe(nsn.as_str()).is_some()
        );
    }

    #[test]
    fn safe_variants_match_validity(input in phone_like()) {
        let valid = is_valid_mobile(input.as_str());
        prop_assert_eq!(normalize_e164_safe(input.as_str()).is_some(), valid);
        prop_assert_eq!(format_local_safe(input.as_str()).is_some(), valid);
        prop_assert_eq!(format_international_safe(input.as_str()).is_some(), valid);
        prop_assert_eq!(get_operator_safe(input.as_str()).is_some(), valid);
    }
}
