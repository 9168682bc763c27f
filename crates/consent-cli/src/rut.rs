//! # Rut Subcommand
//!
//! Normalize, verify and compute check characters for Chilean RUTs.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use consent_core::rut::{check_char, normalize};
use consent_core::Rut;

/// Arguments for the `consent rut` subcommand.
#[derive(Args, Debug)]
pub struct RutArgs {
    #[command(subcommand)]
    pub command: RutCommand,
}

/// `consent rut` operations.
#[derive(Subcommand, Debug)]
pub enum RutCommand {
    /// Print each RUT with dots and dashes removed and letters uppercased.
    Normalize {
        /// RUTs in any common formatting.
        #[arg(required = true, value_name = "RUT")]
        ruts: Vec<String>,
    },

    /// Verify the check character of each RUT.
    Check {
        /// RUTs in any common formatting.
        #[arg(required = true, value_name = "RUT")]
        ruts: Vec<String>,

        /// Print the dotted display form of valid RUTs.
        #[arg(long)]
        formatted: bool,
    },

    /// Compute the check character for a numeric RUT body.
    Dv {
        /// Digits only, separators allowed (e.g. `76.543.210`).
        #[arg(value_name = "BODY")]
        body: String,
    },
}

/// Execute the rut subcommand.
///
/// Returns exit code: 0 on success, 1 if any RUT fails `check`.
pub fn run_rut(args: &RutArgs) -> Result<u8> {
    match &args.command {
        RutCommand::Normalize { ruts } => {
            for raw in ruts {
                println!("{}", normalize(raw));
            }
            Ok(0)
        }
        RutCommand::Check { ruts, formatted } => {
            let mut failed = 0usize;
            for line in check_lines(ruts, *formatted) {
                if line.starts_with("FAIL") {
                    failed += 1;
                }
                println!("{line}");
            }
            tracing::info!(total = ruts.len(), failed, "rut check finished");
            Ok(u8::from(failed > 0))
        }
        RutCommand::Dv { body } => {
            println!("{}", check_digit(body)?);
            Ok(0)
        }
    }
}

/// One report line per input: `OK <rut>` or `FAIL <input>: <reason>`.
pub fn check_lines(ruts: &[String], formatted: bool) -> Vec<String> {
    ruts.iter()
        .map(|raw| match Rut::new(raw.as_str()) {
            Ok(rut) if formatted => format!("OK   {}", rut.formatted()),
            Ok(rut) => format!("OK   {}", rut.as_str()),
            Err(e) => format!("FAIL {raw}: {e}"),
        })
        .collect()
}

/// Check character for a body given with or without separators.
///
/// # Errors
///
/// Fails when the normalized body is empty or contains anything but digits.
pub fn check_digit(body: &str) -> Result<char> {
    let digits = normalize(body);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        bail!("RUT body must be digits only, got {body:?}");
    }
    Ok(check_char(&digits))
}
