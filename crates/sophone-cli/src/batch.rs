//! # Batch Command
//!
//! `sophone batch <file>` validates a newline-delimited list of numbers.
//! Blank lines are skipped. Invalid numbers are reported per line and in
//! the summary but do not change the exit code.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use sophone_core::validate_batch;

use crate::output::Output;

/// Batch subcommand arguments.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// File with one phone number per line.
    pub file: PathBuf,
}

/// Execute the batch subcommand.
pub fn run_batch(args: &BatchArgs, output: &mut Output<'_>) -> Result<u8> {
    let Some(content) = read_numbers_file(&args.file)? else {
        output.diag(format_args!("✗ File not found: {}", args.file.display()))?;
        return Ok(1);
    };

    let numbers = non_blank_lines(&content);
    tracing::info!(path = %args.file.display(), count = numbers.len(), "processing batch");
    let results = validate_batch(&numbers);

    if output.is_json() {
        output.json(&results)?;
        return Ok(0);
    }

    output.line(format_args!(
        "Processing {} numbers from {}:\n",
        numbers.len(),
        args.file.display()
    ))?;
    for (number, result) in numbers.iter().zip(&results) {
        match result.outcome.as_result() {
            Ok(value) => {
                let operator = value.operator.map_or("unknown", |op| op.as_str());
                output.line(format_args!("✓ {number} → {} ({operator})", value.e164))?;
            }
            Err(error) => output.line(format_args!("✗ {number} → {}", error.message()))?,
        }
    }

    let valid = results.iter().filter(|r| r.is_ok()).count();
    output.line(format_args!(
        "\nSummary: {valid} valid, {} invalid",
        results.len() - valid
    ))?;
    Ok(0)
}

/// Read the batch file, returning `None` if it does not exist.
fn read_numbers_file(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("failed to read {}", path.display())),
    }
}

fn non_blank_lines(content: &str) -> Vec<&str> {
    content.lines().filter(|line| !line.trim().is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn run(json: bool, path: PathBuf) -> (u8, String, String) {
        let args = BatchArgs { file: path };
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = {
            let mut output = Output::new(&mut out, &mut err, json);
            run_batch(&args, &mut output).unwrap()
        };
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    fn numbers_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn batch_reports_each_line_and_summary() {
        let file = numbers_file("0611234567\ninvalid\n\n   \n0621234567\n");
        let (code, out, err) = run(false, file.path().to_path_buf());
        assert_eq!(code, 0);
        assert!(err.is_empty());
        assert!(out.starts_with("Processing 3 numbers from "));
        assert!(out.contains("✓ 0611234567 → +252611234567 (Hormuud)\n"));
        assert!(out.contains("✗ invalid → \"invalid\" contains no valid digits\n"));
        assert!(out.contains("✓ 0621234567 → +252621234567 (Somtel)\n"));
        assert!(out.ends_with("\nSummary: 2 valid, 1 invalid\n"));
    }

    #[test]
    fn batch_handles_crlf() {
        let file = numbers_file("0631234567\r\n0641234567\r\n");
        let (_, out, _) = run(false, file.path().to_path_buf());
        assert!(out.contains("✓ 0631234567 → +252631234567 (Telesom)\n"));
        assert!(out.contains("Summary: 2 valid, 0 invalid"));
    }

    #[test]
    fn batch_json_lists_results() {
        let file = numbers_file("0611234567\n123\n");
        let (code, out, _) = run(true, file.path().to_path_buf());
        assert_eq!(code, 0);
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        let list = json.as_array().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0]["ok"], true);
        assert_eq!(list[1]["input"], "123");
        assert_eq!(list[1]["error"]["code"], "INVALID_LENGTH");
    }

    #[test]
    fn batch_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let (code, out, err) = run(false, path.clone());
        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert_eq!(err, format!("✗ File not found: {}\n", path.display()));
    }

    #[test]
    fn batch_empty_file() {
        let file = numbers_file("\n\n");
        let (code, out, _) = run(false, file.path().to_path_buf());
        assert_eq!(code, 0);
        assert!(out.contains("Processing 0 numbers"));
        assert!(out.contains("Summary: 0 valid, 0 invalid"));
    }

    #[test]
    fn non_blank_lines_skips_whitespace() {
        assert_eq!(non_blank_lines("a\n \n\tb\n\n"), vec!["a", "\tb"]);
    }
}
