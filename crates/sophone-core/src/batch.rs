//! # Batch Processing
//!
//! Maps a list of raw inputs through [`validate`] or [`normalize_e164_safe`].
//! Output order matches input order and every element is processed
//! independently; one bad number never aborts the batch.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::input::PhoneInput;
use crate::outcome::{validate, ValidationOutcome};
use crate::phone::normalize_e164_safe;

/// One [`validate_batch`] entry: the original input and its outcome.
///
/// Serializes flat as `{input, ok, value}` or `{input, ok, error}`.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchValidation {
    pub input: Value,
    pub outcome: ValidationOutcome,
}

impl BatchValidation {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

impl Serialize for BatchValidation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("BatchValidation", 3)?;
        state.serialize_field("input", &self.input)?;
        self.outcome.serialize_fields(&mut state)?;
        state.end()
    }
}

/// One [`normalize_batch`] entry: the original input and its E.164 form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchNormalization {
    pub input: Value,
    pub result: Option<String>,
}

/// Validate every input, tagging each outcome with its input.
pub fn validate_batch<I, T>(inputs: T) -> Vec<BatchValidation>
where
    T: IntoIterator<Item = I>,
    I: PhoneInput,
{
    let results: Vec<BatchValidation> = inputs
        .into_iter()
        .enumerate()
        .map(|(index, input)| {
            let outcome = validate(&input);
            tracing::trace!(index, ok = outcome.is_ok(), "batch validate");
            BatchValidation {
                input: input.to_value(),
                outcome,
            }
        })
        .collect();

    tracing::debug!(
        total = results.len(),
        valid = results.iter().filter(|r| r.is_ok()).count(),
        "batch validation finished"
    );
    results
}

/// Normalize every input to E.164, `None` for invalid entries.
pub fn normalize_batch<I, T>(inputs: T) -> Vec<BatchNormalization>
where
    T: IntoIterator<Item = I>,
    I: PhoneInput,
{
    inputs
        .into_iter()
        .map(|input| BatchNormalization {
            result: normalize_e164_safe(&input),
            input: input.to_value(),
        })
        .collect()
}
