//! # Error Types: Validation Failure Taxonomy
//!
//! Every way a phone number can be rejected is expressed as a
//! [`PhoneError`]: a machine-readable [`ErrorCode`], a human-readable
//! message, and an [`ErrorDetails`] payload describing what was seen.
//!
//! ## Design
//!
//! - The validator in [`crate::validate`] is the only producer of
//!   `PhoneError`. Formatters, resolvers, and batch helpers propagate the
//!   value they receive without rewriting it.
//! - `PhoneError` serializes as `{code, message, details}` with camelCase
//!   detail keys, so the JSON shape is identical no matter which entry
//!   point surfaced the failure.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Classification of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input is not text, is empty, or contains no usable digits.
    InvalidInput,
    /// The NSN does not have exactly 9 digits.
    InvalidLength,
    /// The NSN has 9 digits but an unknown 2-digit mobile prefix.
    InvalidPrefix,
    /// Reserved. No current rule produces it.
    Unknown,
}

impl ErrorCode {
    /// All error codes, including the reserved [`ErrorCode::Unknown`].
    pub fn all() -> &'static [ErrorCode] {
        &[
            Self::InvalidLength,
            Self::InvalidPrefix,
            Self::Unknown,
            Self::InvalidInput,
        ]
    }

    /// The wire identifier, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::InvalidLength => "INVALID_LENGTH",
            Self::InvalidPrefix => "INVALID_PREFIX",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured context attached to every [`PhoneError`].
///
/// `input` is always present. The remaining fields are filled in by the
/// rule that fired:
///
/// | code | fields |
/// |------|--------|
/// | `INVALID_INPUT` (not text) | `type` |
/// | `INVALID_INPUT` (no digits, bad characters) | `nsn` |
/// | `INVALID_LENGTH` | `nsn`, `actualLength`, `expectedLength` |
/// | `INVALID_PREFIX` | `nsn`, `prefix`, `validPrefixes` |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetails {
    /// The caller's original input, verbatim.
    pub input: Value,

    /// JSON type name of a non-text input.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,

    /// The reduced National Significant Number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nsn: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_length: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_length: Option<usize>,

    /// The offending 2-character prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Every accepted prefix, sorted ascending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_prefixes: Option<Vec<String>>,
}

impl ErrorDetails {
    /// Details carrying only the original input.
    pub fn for_input(input: Value) -> Self {
        Self {
            input,
            input_type: None,
            nsn: None,
            actual_length: None,
            expected_length: None,
            prefix: None,
            valid_prefixes: None,
        }
    }

    pub(crate) fn with_type(mut self, input_type: &str) -> Self {
        self.input_type = Some(input_type.to_string());
        self
    }

    pub(crate) fn with_nsn(mut self, nsn: &str) -> Self {
        self.nsn = Some(nsn.to_string());
        self
    }

    pub(crate) fn with_lengths(mut self, actual: usize, expected: usize) -> Self {
        self.actual_length = Some(actual);
        self.expected_length = Some(expected);
        self
    }

    pub(crate) fn with_prefix(mut self, prefix: &str, valid: &[&str]) -> Self {
        self.prefix = Some(prefix.to_string());
        self.valid_prefixes = Some(valid.iter().map(|p| p.to_string()).collect());
        self
    }
}

/// A rejected phone number.
///
/// `Display` renders the message only; the code and details are available
/// through accessors and through `Serialize`.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("{message}")]
pub struct PhoneError {
    code: ErrorCode,
    message: String,
    details: ErrorDetails,
}

impl PhoneError {
    /// Assemble an error from its three parts.
    pub fn new(code: ErrorCode, message: impl Into<String>, details: ErrorDetails) -> Self {
        Self {
            code,
            message: message.into(),
            details,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> &ErrorDetails {
        &self.details
    }

    /// Split into `(code, message, details)`.
    pub fn into_parts(self) -> (ErrorCode, String, ErrorDetails) {
        (self.code, self.message, self.details)
    }
}
