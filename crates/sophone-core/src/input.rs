//! # Raw Input
//!
//! Entry points accept anything implementing [`PhoneInput`], not just
//! `&str`. Callers reading numbers out of JSON documents or optional form
//! fields can hand the value over unchanged; non-text values are rejected
//! by the validator with `INVALID_INPUT` rather than being coerced.

use std::borrow::Cow;

use serde_json::Value;

/// A value that may or may not carry phone-number text.
pub trait PhoneInput {
    /// The text to canonicalize, or `None` for non-text input.
    fn as_text(&self) -> Option<&str>;

    /// JSON type name of the value (`"string"`, `"null"`, `"number"`, ...).
    fn type_name(&self) -> &'static str;

    /// The input as a JSON value, recorded verbatim in error details and
    /// batch results.
    fn to_value(&self) -> Value;
}

impl PhoneInput for str {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }

    fn type_name(&self) -> &'static str {
        "string"
    }

    fn to_value(&self) -> Value {
        Value::String(self.to_owned())
    }
}

impl PhoneInput for String {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }

    fn type_name(&self) -> &'static str {
        "string"
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl PhoneInput for Cow<'_, str> {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_ref())
    }

    fn type_name(&self) -> &'static str {
        "string"
    }

    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl<T: PhoneInput + ?Sized> PhoneInput for &T {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: PhoneInput> PhoneInput for Option<T> {
    fn as_text(&self) -> Option<&str> {
        self.as_ref().and_then(|v| v.as_text())
    }

    fn type_name(&self) -> &'static str {
        match self {
            Some(v) => v.type_name(),
            None => "null",
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }
}

impl PhoneInput for Value {
    fn as_text(&self) -> Option<&str> {
        self.as_str()
    }

    fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    fn to_value(&self) -> Value {
        self.clone()
    }
}
