//! # sophone-cli: Somali Phone Number Command-Line Interface
//!
//! Thin front end over `sophone-core`. Each subcommand maps to one library
//! operation and prints either human-readable text or, with `--json`, the
//! serialized library result.
//!
//! ## Subcommands
//!
//! - `validate`, `format`, `e164`, `international`: check and reformat one number
//! - `operator`, `wallet`, `info`, `walletinfo`: resolve operator and wallet data
//! - `operators`, `wallets`: list the registries
//! - `batch`: validate a newline-delimited file of numbers
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handlers write through [`output::Output`] and return an exit code;
//!   they never call `std::process::exit`.
//! - Validation failures are reported, not propagated: `anyhow` errors are
//!   reserved for I/O problems.

pub mod batch;
pub mod lookup;
pub mod output;
pub mod registry;
