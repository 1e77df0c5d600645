//! # Canonicalization: Raw Input to National Significant Number
//!
//! Two total functions sit at the bottom of the pipeline:
//!
//! - [`canonical_digits`] keeps ASCII digits and `+`, dropping every
//!   separator, letter, and non-ASCII character.
//! - [`to_nsn`] strips the international prefix (`+`, `00252`, `252`) and
//!   the domestic trunk `0` from the canonical string.
//!
//! Neither function rejects anything. A mid-string `+` survives into the
//! NSN and is caught later by the validator, as are wrong lengths and
//! unknown prefixes.

use crate::input::PhoneInput;

/// Somali country calling code.
pub const COUNTRY_CODE: &str = "252";

/// International dialing prefix followed by the country code.
const INTERNATIONAL_PREFIX: &str = "00252";

/// Domestic trunk prefix.
const TRUNK_PREFIX: char = '0';

/// Keep only ASCII digits and `+`. Non-text input yields an empty string.
pub fn canonical_digits<I: PhoneInput + ?Sized>(input: &I) -> String {
    match input.as_text() {
        Some(text) => text
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect(),
        None => String::new(),
    }
}

/// Reduce raw input to its National Significant Number candidate.
///
/// Steps, each applied only when the prefix matches:
///
/// 1. canonicalize with [`canonical_digits`];
/// 2. drop a leading `+`;
/// 3. drop `00252`, or else `252`;
/// 4. drop a trunk `0`.
///
/// The remainder is returned as-is, whatever its length.
pub fn to_nsn<I: PhoneInput + ?Sized>(input: &I) -> String {
    let canonical = canonical_digits(input);
    let mut s = canonical.as_str();

    if let Some(rest) = s.strip_prefix('+') {
        s = rest;
    }
    if let Some(rest) = s.strip_prefix(INTERNATIONAL_PREFIX) {
        s = rest;
    } else if let Some(rest) = s.strip_prefix(COUNTRY_CODE) {
        s = rest;
    }
    if let Some(rest) = s.strip_prefix(TRUNK_PREFIX) {
        s = rest;
    }

    s.to_string()
}
