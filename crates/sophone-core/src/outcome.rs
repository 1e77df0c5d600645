//! # Validation Outcome: Non-Throwing Aggregate Result
//!
//! [`validate`] runs the validator once and, on success, computes every
//! derived field at the same time. Either all fields are present or the
//! caller gets the [`PhoneError`]; there is no partial success.
//!
//! The serialized form is the tagged object
//! `{"ok": true, "value": {...}}` / `{"ok": false, "error": {...}}`.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::PhoneError;
use crate::input::PhoneInput;
use crate::nsn::Nsn;
use crate::operator::{Operator, OperatorInfo};
use crate::validate::classify;
use crate::wallet::{Wallet, WalletInfo};

/// Everything known about a valid number.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumberInfo {
    /// The caller's original input.
    pub input: Value,
    pub nsn: Nsn,
    pub e164: String,
    pub local: String,
    pub international: String,
    pub operator: Option<Operator>,
    pub operator_info: Option<&'static OperatorInfo>,
    pub wallet: Option<Wallet>,
    pub wallet_info: Option<&'static WalletInfo>,
}

impl PhoneNumberInfo {
    /// Derive every field from a validated NSN.
    pub fn from_nsn(input: Value, nsn: Nsn) -> Self {
        Self {
            input,
            e164: nsn.e164(),
            local: nsn.local(),
            international: nsn.international(),
            operator: nsn.operator(),
            operator_info: nsn.operator_info(),
            wallet: nsn.wallet(),
            wallet_info: nsn.wallet_info(),
            nsn,
        }
    }
}

/// Result of [`validate`]: the derived fields or the validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationOutcome(Result<PhoneNumberInfo, PhoneError>);

impl ValidationOutcome {
    pub fn is_ok(&self) -> bool {
        self.0.is_ok()
    }

    pub fn value(&self) -> Option<&PhoneNumberInfo> {
        self.0.as_ref().ok()
    }

    pub fn error(&self) -> Option<&PhoneError> {
        self.0.as_ref().err()
    }

    pub fn as_result(&self) -> Result<&PhoneNumberInfo, &PhoneError> {
        self.0.as_ref()
    }

    pub fn into_result(self) -> Result<PhoneNumberInfo, PhoneError> {
        self.0
    }

    /// Write the `ok` tag and the payload field into an open struct.
    pub(crate) fn serialize_fields<S: SerializeStruct>(&self, state: &mut S) -> Result<(), S::Error> {
        match &self.0 {
            Ok(value) => {
                state.serialize_field("ok", &true)?;
                state.serialize_field("value", value)
            }
            Err(error) => {
                state.serialize_field("ok", &false)?;
                state.serialize_field("error", error)
            }
        }
    }
}

impl From<ValidationOutcome> for Result<PhoneNumberInfo, PhoneError> {
    fn from(outcome: ValidationOutcome) -> Self {
        outcome.0
    }
}

impl Serialize for ValidationOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationOutcome", 2)?;
        self.serialize_fields(&mut state)?;
        state.end()
    }
}

/// Validate `input` and compute all derived fields. Never fails.
pub fn validate<I: PhoneInput + ?Sized>(input: &I) -> ValidationOutcome {
    ValidationOutcome(classify(input).map(|nsn| PhoneNumberInfo::from_nsn(input.to_value(), nsn)))
}
