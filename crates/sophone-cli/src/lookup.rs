//! # Single-Number Commands
//!
//! `validate`, `format`, `e164`, `international`, `operator`, `wallet`,
//! `info`, and `walletinfo`. Each runs one library operation on the number
//! given on the command line and reports through [`Output`].
//!
//! ## Usage
//!
//! ```bash
//! sophone validate "+252 61 123 4567"
//! sophone format 0611234567          # 0611 234 567
//! sophone e164 0611234567            # +252611234567
//! sophone international 0611234567   # +252 61 123 4567
//! sophone operator +252771234567     # Hormuud
//! sophone --json info 0611234567
//! ```

use anyhow::Result;
use clap::Args;

use sophone_core::{
    format_international, format_local, get_operator, get_operator_info, get_wallet,
    get_wallet_info, normalize_e164, validate, OperatorInfo, WalletInfo,
};

use crate::output::Output;

/// Arguments shared by every single-number command.
#[derive(Args, Debug)]
pub struct NumberArgs {
    /// Phone number in any accepted notation (e.g. "+252 61 123 4567").
    pub number: String,
}

/// Target notation for the formatting commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// `0XXX XXX XXX`
    Local,
    /// `+252XXXXXXXXX`
    E164,
    /// `+252 XX XXX XXXX`
    International,
}

/// `validate`: report whether the number is valid.
///
/// Text mode prints `✓ valid` / `✗ invalid` on stdout and the reason on
/// stderr. JSON mode prints the full validation outcome.
pub fn run_validate(args: &NumberArgs, output: &mut Output<'_>) -> Result<u8> {
    let outcome = validate(args.number.as_str());
    let code = if outcome.is_ok() { 0 } else { 1 };

    if output.is_json() {
        output.json(&outcome)?;
        return Ok(code);
    }

    match outcome.error() {
        None => output.line("✓ valid")?,
        Some(error) => {
            output.line("✗ invalid")?;
            output.diag(format_args!("  {}", error.message()))?;
        }
    }
    Ok(code)
}

/// `format` / `e164` / `international`: print the number in `notation`.
pub fn run_format(args: &NumberArgs, notation: Notation, output: &mut Output<'_>) -> Result<u8> {
    let number = args.number.as_str();
    let result = match notation {
        Notation::Local => format_local(number),
        Notation::E164 => normalize_e164(number),
        Notation::International => format_international(number),
    };
    output.report(result, |o, formatted| o.line(formatted))
}

/// `operator`: print the operator name, or `unknown`.
pub fn run_operator(args: &NumberArgs, output: &mut Output<'_>) -> Result<u8> {
    output.report(get_operator(args.number.as_str()), |o, operator| match operator {
        Some(operator) => o.line(operator),
        None => o.line("unknown"),
    })
}

/// `wallet`: print the primary wallet name, or `none`.
pub fn run_wallet(args: &NumberArgs, output: &mut Output<'_>) -> Result<u8> {
    output.report(get_wallet(args.number.as_str()), |o, wallet| match wallet {
        Some(wallet) => o.line(wallet),
        None => o.line("none"),
    })
}

/// `info`: print the operator record of the number.
pub fn run_info(args: &NumberArgs, output: &mut Output<'_>) -> Result<u8> {
    output.report(get_operator_info(args.number.as_str()), |o, info| match info {
        Some(info) => write_operator_info(o, info),
        None => o.line("No operator information available"),
    })
}

/// `walletinfo`: print the wallet record of the number's operator.
pub fn run_wallet_info(args: &NumberArgs, output: &mut Output<'_>) -> Result<u8> {
    output.report(get_wallet_info(args.number.as_str()), |o, info| match info {
        Some(info) => write_wallet_info(o, info),
        None => o.line("No wallet information available"),
    })
}

fn write_operator_info(o: &mut Output<'_>, info: &OperatorInfo) -> std::io::Result<()> {
    o.line(format_args!("Operator: {}", info.name))?;
    o.line(format_args!("Prefixes: {}", info.prefixes.join(", ")))?;
    o.line(format_args!("Type: {}", info.network_type))?;
    if let Some(website) = info.website {
        o.line(format_args!("Website: {website}"))?;
    }
    if let Some(wallet) = info.wallet {
        o.line(format_args!("Wallet: {}", wallet.info().full_name))?;
    }
    Ok(())
}

fn write_wallet_info(o: &mut Output<'_>, info: &WalletInfo) -> std::io::Result<()> {
    o.line(format_args!("Wallet: {} ({})", info.full_name, info.name))?;
    o.line(format_args!("Operator: {}", info.operating_operator))?;
    o.line(format_args!("Description: {}", info.description))?;
    if !info.features.is_empty() {
        o.line(format_args!("Features: {}", info.features.join(", ")))?;
    }
    if let Some(ussd) = info.ussd_code {
        o.line(format_args!("USSD: {ussd}"))?;
    }
    if let Some(website) = info.website {
        o.line(format_args!("Website: {website}"))?;
    }
    Ok(())
}
