//! # Formatters and Resolvers: Two Calling Conventions
//!
//! Each operation exists twice:
//!
//! - the plain function returns `Result<T, PhoneError>` and surfaces the
//!   validator's error verbatim;
//! - the `_safe` function returns `Option<T>` and maps every failure to
//!   `None`.
//!
//! The safe variants are generated from the plain ones by
//! `safe_variant!`, so the two conventions cannot drift apart.
//!
//! ```
//! use sophone_core::phone::{normalize_e164, normalize_e164_safe};
//!
//! assert_eq!(normalize_e164("0611234567").unwrap(), "+252611234567");
//! assert!(normalize_e164("123").is_err());
//! assert_eq!(normalize_e164_safe("123"), None);
//! ```

use crate::error::PhoneError;
use crate::input::PhoneInput;
use crate::operator::{Operator, OperatorInfo};
use crate::validate::classify;
use crate::wallet::{Wallet, WalletInfo};

/// Generate the non-failing counterpart of a `Result`-returning operation.
///
/// Operations that already return an `Option` are flattened, so a valid
/// number without an operator and an invalid number both give `None`.
macro_rules! safe_variant {
    ($(#[$meta:meta])* $safe:ident => $op:ident -> Option<$ret:ty>) => {
        $(#[$meta])*
        pub fn $safe<I: PhoneInput + ?Sized>(input: &I) -> Option<$ret> {
            $op(input).ok().flatten()
        }
    };
    ($(#[$meta:meta])* $safe:ident => $op:ident -> $ret:ty) => {
        $(#[$meta])*
        pub fn $safe<I: PhoneInput + ?Sized>(input: &I) -> Option<$ret> {
            $op(input).ok()
        }
    };
}

/// Normalize to E.164: `+252XXXXXXXXX`.
pub fn normalize_e164<I: PhoneInput + ?Sized>(input: &I) -> Result<String, PhoneError> {
    Ok(classify(input)?.e164())
}

/// Format for domestic dialing: `0XXX XXX XXX`.
pub fn format_local<I: PhoneInput + ?Sized>(input: &I) -> Result<String, PhoneError> {
    Ok(classify(input)?.local())
}

/// Format for international display: `+252 XX XXX XXXX`.
pub fn format_international<I: PhoneInput + ?Sized>(input: &I) -> Result<String, PhoneError> {
    Ok(classify(input)?.international())
}

/// The operator of a valid number.
pub fn get_operator<I: PhoneInput + ?Sized>(input: &I) -> Result<Option<Operator>, PhoneError> {
    Ok(classify(input)?.operator())
}

pub fn get_operator_info<I: PhoneInput + ?Sized>(
    input: &I,
) -> Result<Option<&'static OperatorInfo>, PhoneError> {
    Ok(classify(input)?.operator_info())
}

/// The primary wallet of a valid number's operator.
pub fn get_wallet<I: PhoneInput + ?Sized>(input: &I) -> Result<Option<Wallet>, PhoneError> {
    Ok(classify(input)?.wallet())
}

pub fn get_wallet_info<I: PhoneInput + ?Sized>(
    input: &I,
) -> Result<Option<&'static WalletInfo>, PhoneError> {
    Ok(classify(input)?.wallet_info())
}

safe_variant!(
    /// [`normalize_e164`], or `None` if the input is invalid.
    normalize_e164_safe => normalize_e164 -> String
);
safe_variant!(
    /// [`format_local`], or `None` if the input is invalid.
    format_local_safe => format_local -> String
);
safe_variant!(
    /// [`format_international`], or `None` if the input is invalid.
    format_international_safe => format_international -> String
);
safe_variant!(
    /// [`get_operator`], or `None` if the input is invalid.
    get_operator_safe => get_operator -> Option<Operator>
);
safe_variant!(get_operator_info_safe => get_operator_info -> Option<&'static OperatorInfo>);
safe_variant!(
    /// [`get_wallet`], or `None` if the input is invalid or has no wallet.
    get_wallet_safe => get_wallet -> Option<Wallet>
);
safe_variant!(get_wallet_info_safe => get_wallet_info -> Option<&'static WalletInfo>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use serde_json::json;

    #[test]
    fn normalize_e164_formats() {
        for input in ["0611234567", "611234567", "252611234567", "+252611234567"] {
            assert_eq!(normalize_e164(input).unwrap(), "+252611234567");
        }
    }

    #[test]
    fn normalize_e164_errors() {
        let err = normalize_e164("invalid").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidInput);
        assert!(err.message().contains("contains no valid digits"));
        assert_eq!(
            normalize_e164("061123456").unwrap_err().code(),
            ErrorCode::InvalidLength
        );
    }

    #[test]
    fn format_local_cases() {
        assert_eq!(format_local("+252611234567").unwrap(), "0611 234 567");
        assert_eq!(format_local("611234567").unwrap(), "0611 234 567");
        let err = format_local("123").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidLength);
        assert!(err.message().contains("too short"));
    }

    #[test]
    fn format_international_cases() {
        assert_eq!(format_international("0611234567").unwrap(), "+252 61 123 4567");
        assert_eq!(format_international("+252611234567").unwrap(), "+252 61 123 4567");
        assert!(format_international("invalid").is_err());
    }

    #[test]
    fn operators() {
        assert_eq!(get_operator("+252611234567").unwrap(), Some(Operator::Hormuud));
        assert_eq!(get_operator("+252771234567").unwrap(), Some(Operator::Hormuud));
        assert_eq!(get_operator("+252621234567").unwrap(), Some(Operator::Somtel));
        assert_eq!(get_operator("+252631234567").unwrap(), Some(Operator::Telesom));
        assert_eq!(get_operator("+252711234567").unwrap(), Some(Operator::Amtel));
        let err = get_operator("0111234567").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidPrefix);
        assert!(err.message().contains("invalid prefix"));
    }

    #[test]
    fn operator_info() {
        let info = get_operator_info("0611234567").unwrap().unwrap();
        assert_eq!(info.name, "Hormuud Telecom Somalia");
        assert_eq!(info.prefixes, &["61", "77"]);
        assert_eq!(info.website, Some("https://hormuud.com"));
        assert_eq!(info.network_type, "GSM");
        assert!(get_operator_info("invalid").is_err());
    }

    #[test]
    fn wallets() {
        assert_eq!(get_wallet("0611234567").unwrap(), Some(Wallet::Evc));
        assert_eq!(get_wallet("0621234567").unwrap(), Some(Wallet::Sahal));
        assert_eq!(get_wallet("0631234567").unwrap(), Some(Wallet::Zaad));
        assert_eq!(get_wallet("0641234567").unwrap(), None);
        assert_eq!(get_wallet_info("0641234567").unwrap(), None);
        assert_eq!(
            get_wallet_info("0611234567").unwrap().unwrap().full_name,
            "EVC Plus"
        );
    }

    #[test]
    fn safe_variants_return_values() {
        assert_eq!(normalize_e164_safe("0611234567").as_deref(), Some("+252611234567"));
        assert_eq!(format_local_safe("0611234567").as_deref(), Some("0611 234 567"));
        assert_eq!(
            format_international_safe("0611234567").as_deref(),
            Some("+252 61 123 4567")
        );
        assert_eq!(get_operator_safe("+252621234567"), Some(Operator::Somtel));
        assert_eq!(
            get_operator_info_safe("0621234567").map(|i| i.name),
            Some("Somtel Network")
        );
        assert_eq!(get_wallet_safe("0631234567"), Some(Wallet::Zaad));
        assert_eq!(get_wallet_info_safe("0631234567").map(|i| i.name), Some("ZAAD"));
    }

    #[test]
    fn safe_variants_swallow_errors() {
        for input in ["invalid", "123", "0111234567", "", "06112345678"] {
            assert_eq!(normalize_e164_safe(input), None);
            assert_eq!(format_local_safe(input), None);
            assert_eq!(format_international_safe(input), None);
            assert_eq!(get_operator_safe(input), None);
            assert_eq!(get_operator_info_safe(input), None);
            assert_eq!(get_wallet_safe(input), None);
            assert_eq!(get_wallet_info_safe(input), None);
        }
    }

    #[test]
    fn safe_variants_accept_non_text() {
        assert_eq!(normalize_e164_safe(&json!(611234567)), None);
        assert_eq!(get_operator_safe(&json!(null)), None);
        assert_eq!(format_local_safe(&None::<String>), None);
        assert_eq!(
            normalize_e164_safe(&json!("0611234567")).as_deref(),
            Some("+252611234567")
        );
    }

    #[test]
    fn safe_wallet_none_for_valid_number_without_wallet() {
        assert_eq!(get_operator_safe("0641234567"), Some(Operator::SomLink));
        assert_eq!(get_wallet_safe("0641234567"), None);
    }
}
