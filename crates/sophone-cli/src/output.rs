//! # Output Sink
//!
//! Routes command output to stdout and diagnostics to stderr, in text or
//! JSON mode. Handlers receive an [`Output`] instead of printing directly so
//! tests can capture both streams.

use std::io::{self, Write};

use anyhow::Result;
use serde::Serialize;
use sophone_core::PhoneError;

/// JSON envelope for single-number commands: `{ok, value}` or `{ok, error}`.
#[derive(Serialize)]
struct Envelope<'a, T> {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a PhoneError>,
}

/// Stdout/stderr pair plus the output mode chosen on the command line.
pub struct Output<'a> {
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
    json: bool,
}

impl<'a> Output<'a> {
    pub fn new(out: &'a mut dyn Write, err: &'a mut dyn Write, json: bool) -> Self {
        Self { out, err, json }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Write one line to stdout.
    pub fn line(&mut self, text: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// Write one line to stderr.
    pub fn diag(&mut self, text: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.err, "{text}")
    }

    /// Pretty-print `value` as JSON on stdout.
    pub fn json<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer_pretty(&mut *self.out, value)?;
        writeln!(self.out)?;
        Ok(())
    }

    /// Report the result of a single-number operation.
    ///
    /// Success renders through `text` (or the JSON envelope) and yields exit
    /// code 0. Failure prints `✗ <message>` to stderr (or the JSON envelope
    /// to stdout) and yields 1.
    pub fn report<T, F>(&mut self, result: Result<T, PhoneError>, text: F) -> Result<u8>
    where
        T: Serialize,
        F: FnOnce(&mut Self, &T) -> io::Result<()>,
    {
        match result {
            Ok(value) => {
                if self.json {
                    self.json(&Envelope {
                        ok: true,
                        value: Some(&value),
                        error: None,
                    })?;
                } else {
                    text(self, &value)?;
                }
                Ok(0)
            }
            Err(error) => {
                tracing::debug!(code = %error.code(), "command failed validation");
                if self.json {
                    self.json(&Envelope::<()> {
                        ok: false,
                        value: None,
                        error: Some(&error),
                    })?;
                } else {
                    self.diag(format_args!("✗ {}", error.message()))?;
                }
                Ok(1)
            }
        }
    }
}
