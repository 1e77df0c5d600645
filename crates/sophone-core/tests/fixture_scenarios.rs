//! # End-to-End Scenarios
//!
//! Known inputs run through the public API, checking every derived field
//! and every error code against fixed expectations.

use serde_json::json;
use sophone_core::{
    all_operators, all_wallets, format_international, format_local, get_operator,
    get_operator_info, get_wallet, get_wallet_info, is_valid_mobile, normalize_batch,
    normalize_e164, operator_by_prefix, supported_wallets, to_nsn, validate, validate_batch,
    wallet_by_name, wallet_by_operator, ErrorCode, Operator, Wallet,
};

#[test]
fn hormuud_number_all_fields() {
    let outcome = validate("0611234567");
    let value = outcome.value().expect("0611234567 should be valid");
    assert_eq!(value.nsn.as_str(), "611234567");
    assert_eq!(value.e164, "+252611234567");
    assert_eq!(value.local, "0611 234 567");
    assert_eq!(value.international, "+252 61 123 4567");
    assert_eq!(value.operator, Some(Operator::Hormuud));
    assert_eq!(value.wallet, Some(Wallet::Evc));
}

#[test]
fn spaced_international_input() {
    assert!(is_valid_mobile("+252 61 123 4567"));
    assert_eq!(to_nsn("+252 61 123 4567"), "611234567");
    assert_eq!(normalize_e164("+252 61 123 4567").unwrap(), "+252611234567");
}

#[test]
fn somtel_and_telesom() {
    assert_eq!(get_operator("0621234567").unwrap(), Some(Operator::Somtel));
    assert_eq!(get_wallet("0621234567").unwrap(), Some(Wallet::Sahal));
    assert_eq!(get_operator("0631234567").unwrap(), Some(Operator::Telesom));
    assert_eq!(get_wallet("0631234567").unwrap(), Some(Wallet::Zaad));
}

#[test]
fn somlink_is_valid_without_wallet() {
    assert!(is_valid_mobile("0641234567"));
    assert_eq!(get_operator("0641234567").unwrap(), Some(Operator::SomLink));
    assert_eq!(get_wallet("0641234567").unwrap(), None);
    assert_eq!(get_wallet_info("0641234567").unwrap(), None);
}

#[test]
fn invalid_prefix_scenario() {
    let outcome = validate("0111234567");
    let error = outcome.error().expect("prefix 11 must be rejected");
    assert_eq!(error.code(), ErrorCode::InvalidPrefix);
    assert!(error.message().contains("invalid prefix"));
    let prefixes = error.details().valid_prefixes.clone().unwrap();
    let mut sorted = prefixes.clone();
    sorted.sort();
    assert_eq!(prefixes, sorted);
}

#[test]
fn too_short_scenario() {
    let error = validate("123").into_result().unwrap_err();
    assert_eq!(error.code(), ErrorCode::InvalidLength);
    assert!(error.message().contains("too short"));
    assert_eq!(error.details().actual_length, Some(3));
}

#[test]
fn empty_and_non_text_scenarios() {
    assert_eq!(validate("").error().unwrap().code(), ErrorCode::InvalidInput);
    assert_eq!(
        validate(&json!(611234567)).error().unwrap().code(),
        ErrorCode::InvalidInput
    );
    assert_eq!(
        validate(&None::<&str>).error().unwrap().code(),
        ErrorCode::InvalidInput
    );
}

#[test]
fn batch_scenario() {
    let results = validate_batch(["0611234567", "invalid", "0621234567"]);
    let oks: Vec<bool> = results.iter().map(|r| r.is_ok()).collect();
    assert_eq!(oks, vec![true, false, true]);

    let normalized = normalize_batch(["0611234567", "invalid", "0621234567"]);
    let results: Vec<Option<&str>> = normalized.iter().map(|r| r.result.as_deref()).collect();
    assert_eq!(
        results,
        vec![Some("+252611234567"), None, Some("+252621234567")]
    );
}

#[test]
fn throwing_convention_carries_validator_error() {
    let ops: [fn(&str) -> Result<String, sophone_core::PhoneError>; 3] = [
        normalize_e164::<str>,
        format_local::<str>,
        format_international::<str>,
    ];
    for op in ops {
        let err = op("0111234567").unwrap_err();
        assert_eq!(err, validate("0111234567").into_result().unwrap_err());
    }
    let err = get_operator_info("123").unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidLength);
}

#[test]
fn registry_lookups() {
    assert_eq!(all_operators().len(), 8);
    assert_eq!(all_wallets().len(), 5);
    assert_eq!(operator_by_prefix("61"), Some(Operator::Hormuud));
    assert_eq!(operator_by_prefix("62"), Some(Operator::Somtel));
    assert_eq!(operator_by_prefix("11"), None);
    assert_eq!(wallet_by_name("ZAAD").unwrap().operating_operator, "Telesom");
    assert_eq!(wallet_by_operator("Hormuud").unwrap().name, "EVC");
    assert!(supported_wallets().contains(&"Jeeb"));
}

#[test]
fn outcome_json_shape() {
    let json = serde_json::to_value(validate("0621234567")).unwrap();
    assert_eq!(json["ok"], true);
    assert_eq!(json["value"]["input"], "0621234567");
    assert_eq!(json["value"]["e164"], "+252621234567");
    assert_eq!(json["value"]["operatorInfo"]["prefixes"], json!(["62", "65", "66"]));
    assert_eq!(json["value"]["walletInfo"]["name"], "Sahal");
}
