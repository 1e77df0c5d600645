//! # sophone CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Command output goes to stdout; diagnostics and logs go to stderr.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sophone_cli::batch::{run_batch, BatchArgs};
use sophone_cli::lookup::{
    run_format, run_info, run_operator, run_validate, run_wallet, run_wallet_info, Notation,
    NumberArgs,
};
use sophone_cli::output::Output;
use sophone_cli::registry::{run_operators, run_wallets};

/// sophone - Somali phone utilities
///
/// Validates Somali mobile numbers, converts them between local,
/// international, and E.164 notation, and looks up the operator and
/// mobile-money wallet behind a number.
#[derive(Parser, Debug)]
#[command(
    name = "sophone",
    version,
    about,
    long_about = None,
    arg_required_else_help = true,
    after_help = "Examples:\n  sophone validate \"+252 61 123 4567\"\n  sophone format 0611234567\n  sophone operator +252771234567\n  sophone batch numbers.txt"
)]
struct Cli {
    /// Enable verbose logging. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a phone number.
    Validate(NumberArgs),

    /// Format to local notation (0XXX XXX XXX).
    Format(NumberArgs),

    /// Format to E.164 (+252XXXXXXXXX).
    #[command(name = "e164")]
    E164(NumberArgs),

    /// Format to international notation (+252 XX XXX XXXX).
    International(NumberArgs),

    /// Get the operator name.
    Operator(NumberArgs),

    /// Get the primary mobile-money wallet name.
    Wallet(NumberArgs),

    /// Get detailed operator information.
    Info(NumberArgs),

    /// Get detailed wallet information.
    #[command(name = "walletinfo")]
    WalletInfo(NumberArgs),

    /// List all operators.
    Operators,

    /// List all mobile-money wallets.
    Wallets,

    /// Validate numbers from a file (one per line).
    Batch(BatchArgs),
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(usage_exit_code(e.kind()));
        }
    };

    init_tracing(cli.verbose);
    tracing::debug!(command = ?cli.command, json = cli.json, "sophone starting");

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();
    let result = {
        let mut output = Output::new(&mut out, &mut err, cli.json);
        dispatch(&cli.command, &mut output)
    };
    let _ = out.flush();

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn dispatch(command: &Commands, output: &mut Output<'_>) -> anyhow::Result<u8> {
    match command {
        Commands::Validate(args) => run_validate(args, output),
        Commands::Format(args) => run_format(args, Notation::Local, output),
        Commands::E164(args) => run_format(args, Notation::E164, output),
        Commands::International(args) => run_format(args, Notation::International, output),
        Commands::Operator(args) => run_operator(args, output),
        Commands::Wallet(args) => run_wallet(args, output),
        Commands::Info(args) => run_info(args, output),
        Commands::WalletInfo(args) => run_wallet_info(args, output),
        Commands::Operators => run_operators(output),
        Commands::Wallets => run_wallets(output),
        Commands::Batch(args) => run_batch(args, output),
    }
}

/// Initialize tracing on stderr. `RUST_LOG` wins over the `-v` count.
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn verbosity_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Exit code for a clap parse failure: help and version requests succeed,
/// every usage error exits 1.
fn usage_exit_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 0,
        _ => 1,
    }
}
