//! # Validator: Single Source of Failure Classification
//!
//! [`classify`] decides whether raw input is a Somali mobile number and,
//! if not, exactly why. Every other entry point in the crate calls it and
//! forwards its [`PhoneError`] untouched, so a given input can only ever be
//! judged invalid one way.
//!
//! Rules, first match wins:
//!
//! 1. not text, or empty text → `INVALID_INPUT`
//! 2. NSN empty → `INVALID_INPUT`
//! 3. NSN shorter than 9 → `INVALID_LENGTH`
//! 4. NSN longer than 9 → `INVALID_LENGTH`
//! 5. unknown 2-character prefix → `INVALID_PREFIX`
//! 6. stray non-digit (a mid-string `+`) → `INVALID_INPUT`
//! 7. otherwise valid

use crate::canonical::to_nsn;
use crate::error::{ErrorCode, ErrorDetails, PhoneError};
use crate::input::PhoneInput;
use crate::nsn::Nsn;
use crate::operator::{is_mobile_prefix, MOBILE_PREFIXES};

/// Number of digits in a Somali mobile NSN.
pub const NSN_LENGTH: usize = 9;

/// Validate raw input, returning its [`Nsn`] or the reason it was rejected.
pub fn classify<I: PhoneInput + ?Sized>(input: &I) -> Result<Nsn, PhoneError> {
    let text = match input.as_text() {
        Some(text) if !text.is_empty() => text,
        _ => {
            return Err(reject(
                ErrorCode::InvalidInput,
                "Phone number is required and must be a string".to_string(),
                ErrorDetails::for_input(input.to_value()).with_type(input.type_name()),
            ));
        }
    };

    let nsn = to_nsn(text);
    let details = ErrorDetails::for_input(input.to_value()).with_nsn(&nsn);

    if nsn.is_empty() {
        return Err(reject(
            ErrorCode::InvalidInput,
            format!("\"{text}\" contains no valid digits"),
            details,
        ));
    }

    // The canonicalizer only emits ASCII, so byte length is digit count.
    let len = nsn.len();
    if len < NSN_LENGTH {
        return Err(reject(
            ErrorCode::InvalidLength,
            format!(
                "\"{text}\" is too short ({len} digits). Somali mobile numbers need {NSN_LENGTH} digits"
            ),
            details.with_lengths(len, NSN_LENGTH),
        ));
    }
    if len > NSN_LENGTH {
        return Err(reject(
            ErrorCode::InvalidLength,
            format!(
                "\"{text}\" is too long ({len} digits). Somali mobile numbers need exactly {NSN_LENGTH} digits"
            ),
            details.with_lengths(len, NSN_LENGTH),
        ));
    }

    let prefix = &nsn[..2];
    if !is_mobile_prefix(prefix) {
        return Err(reject(
            ErrorCode::InvalidPrefix,
            format!(
                "\"{text}\" has invalid prefix \"{prefix}\". Valid prefixes are: {}",
                MOBILE_PREFIXES.join(", ")
            ),
            details.with_prefix(prefix, MOBILE_PREFIXES),
        ));
    }

    if !nsn.bytes().all(|b| b.is_ascii_digit()) {
        return Err(reject(
            ErrorCode::InvalidInput,
            format!("\"{text}\" contains invalid characters"),
            details,
        ));
    }

    Ok(Nsn::from_validated(nsn))
}

/// Why `input` is invalid, or `None` if it is a valid mobile number.
pub fn validation_error<I: PhoneInput + ?Sized>(input: &I) -> Option<PhoneError> {
    classify(input).err()
}

/// Whether `input` is a valid Somali mobile number. Never fails.
pub fn is_valid_mobile<I: PhoneInput + ?Sized>(input: &I) -> bool {
    classify(input).is_ok()
}

fn reject(code: ErrorCode, message: String, details: ErrorDetails) -> PhoneError {
    tracing::debug!(
        %code,
        nsn_len = details.nsn.as_deref().map(str::len),
        "phone number rejected"
    );
    PhoneError::new(code, message, details)
}
