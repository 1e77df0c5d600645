//! # Registry Listings
//!
//! `operators` and `wallets`: print the compiled-in operator and wallet
//! tables.

use anyhow::Result;

use sophone_core::{all_operators, all_wallets};

use crate::output::Output;

/// `operators`: list every operator with its prefixes.
pub fn run_operators(output: &mut Output<'_>) -> Result<u8> {
    let operators = all_operators();
    if output.is_json() {
        output.json(&operators)?;
        return Ok(0);
    }

    output.line("Available Operators:")?;
    for entry in &operators {
        output.line(format_args!(
            "  {} ({})",
            entry.info.name,
            entry.info.prefixes.join(", ")
        ))?;
        if let Some(website) = entry.info.website {
            output.line(format_args!("    Website: {website}"))?;
        }
        if let Some(wallet) = entry.info.wallet {
            output.line(format_args!("    Wallet: {wallet}"))?;
        }
    }
    Ok(0)
}

/// `wallets`: list every mobile-money wallet.
pub fn run_wallets(output: &mut Output<'_>) -> Result<u8> {
    let wallets = all_wallets();
    if output.is_json() {
        output.json(&wallets)?;
        return Ok(0);
    }

    output.line("Available Wallets:")?;
    for entry in &wallets {
        output.line(format_args!(
            "  {} ({}) - {}",
            entry.info.full_name, entry.info.name, entry.info.operating_operator
        ))?;
        if let Some(ussd) = entry.info.ussd_code {
            output.line(format_args!("    USSD: {ussd}"))?;
        }
    }
    Ok(0)
}
