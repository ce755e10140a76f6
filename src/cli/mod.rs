//! cli
//!
//! Command-line interface layer for Restock.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and flags
//! - Delegate to the reconcile flow
//! - Does NOT mutate documents directly
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! [`commands::reconcile`], which owns the select/normalize/merge/update
//! pipeline over the two inventory documents.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use anyhow::{bail, Result};

/// Execution context derived from global CLI flags.
#[derive(Debug, Clone)]
pub struct Context {
    pub quiet: bool,
    pub debug: bool,
    pub interactive: bool,
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    if let Some(shell) = cli.completions {
        return commands::completions(shell);
    }

    let ctx = Context {
        quiet: cli.quiet,
        debug: cli.debug,
        interactive: cli.interactive(),
    };

    // clap enforces presence when --completions is absent.
    let (input, output) = match (&cli.input_file, &cli.output_file) {
        (Some(input), Some(output)) => (input.as_path(), output.as_path()),
        _ => bail!("both --input-file and --output-file are required"),
    };

    commands::reconcile(&ctx, input, output)
}
