//! buildstamp CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Manifest error

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;

use cli::Cli;

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const MANIFEST_ERROR: u8 = 3;
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the version notice
    let default_filter = if cli.verbose {
        "buildstamp_core=debug,buildstamp_cli=debug,warn"
    } else {
        "warn"
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .try_init();

    match cli::execute(&cli) {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            eprintln!("{}", failure_message(&e));
            ExitCode::from(categorize_error(&e))
        }
    }
}

/// The single stderr line reported for a failed stamp
fn failure_message(e: &anyhow::Error) -> String {
    format!("❌ Error setting build version: {:#}", e)
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    match e.downcast_ref::<buildstamp_core::StampError>() {
        Some(err) if err.is_manifest_error() => ExitCodes::MANIFEST_ERROR,
        _ => ExitCodes::GENERAL_ERROR,
    }
}
