//! # Validated National Significant Number
//!
//! [`Nsn`] is the only way to hold a number that passed validation. Its
//! inner string is private and every constructor routes through
//! [`crate::validate::classify`], so any `Nsn` is exactly nine ASCII digits
//! starting with a known mobile prefix. The formatters and resolvers below
//! rely on that when slicing.

use serde::{Deserialize, Serialize};

use crate::canonical::COUNTRY_CODE;
use crate::error::PhoneError;
use crate::input::PhoneInput;
use crate::operator::{Operator, OperatorInfo};
use crate::validate::classify;
use crate::wallet::{Wallet, WalletInfo};

/// Deserialize a newtype from a plain string through its validating
/// constructor, so invalid values are rejected at the serde boundary.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw.as_str()).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// A validated 9-digit Somali mobile NSN (no country code, no trunk `0`).
///
/// Serializes as the bare NSN string. Deserializing accepts any input
/// format [`Nsn::new`] accepts and stores the reduced form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Nsn(String);

impl_validating_deserialize!(Nsn);

impl Nsn {
    /// Validate raw input and keep its reduced NSN.
    ///
    /// # Errors
    ///
    /// Returns the [`PhoneError`] produced by [`classify`].
    pub fn new<I: PhoneInput + ?Sized>(input: &I) -> Result<Self, PhoneError> {
        classify(input)
    }

    /// Wrap a string already checked by the validator.
    pub(crate) fn from_validated(nsn: String) -> Self {
        Self(nsn)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 2-digit mobile prefix.
    pub fn prefix(&self) -> &str {
        &self.0[..2]
    }

    /// `+252XXXXXXXXX`
    pub fn e164(&self) -> String {
        format!("+{COUNTRY_CODE}{}", self.0)
    }

    /// `0XXX XXX XXX`
    pub fn local(&self) -> String {
        format!("0{} {} {}", &self.0[..3], &self.0[3..6], &self.0[6..])
    }

    /// `+252 XX XXX XXXX`
    pub fn international(&self) -> String {
        format!(
            "+{COUNTRY_CODE} {} {} {}",
            &self.0[..2],
            &self.0[2..5],
            &self.0[5..]
        )
    }

    /// The operator owning this number's prefix.
    ///
    /// Always `Some` with the current tables, but a prefix without an
    /// owner degrades to `None` instead of failing.
    pub fn operator(&self) -> Option<Operator> {
        Operator::from_prefix(self.prefix())
    }

    pub fn operator_info(&self) -> Option<&'static OperatorInfo> {
        self.operator().map(|op| op.info())
    }

    /// The primary wallet of this number's operator.
    pub fn wallet(&self) -> Option<Wallet> {
        self.operator().and_then(|op| op.wallet())
    }

    pub fn wallet_info(&self) -> Option<&'static WalletInfo> {
        self.wallet().map(|w| w.info())
    }
}

impl std::fmt::Display for Nsn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Nsn {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Nsn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
