//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Flags
//!
//! - `-i/--input-file <path>`: master inventory feed (required)
//! - `-o/--output-file <path>`: output inventory feed (required)
//! - `--completions <shell>`: print a completion script and exit
//! - `--debug`: enable debug logging
//! - `--interactive` / `--no-interactive`: control prompts
//! - `--quiet` / `-q`: minimal output
//!
//! Passing the same path to both `-i` and `-o` selects single-file mode:
//! the merge stage is skipped and the result is printed to stdout.

use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;

/// Restock - reconcile inventory allocation XML feeds
#[derive(Parser, Debug)]
#[command(name = "restock")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Master inventory feed to read records from
    #[arg(
        short = 'i',
        long = "input-file",
        value_name = "input_file",
        required_unless_present = "completions"
    )]
    pub input_file: Option<PathBuf>,

    /// Output inventory feed to merge records into
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "output_file",
        required_unless_present = "completions"
    )]
    pub output_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Minimal output; implies --no-interactive
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable interactive prompts
    #[arg(long = "interactive", conflicts_with = "no_interactive")]
    pub interactive_flag: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_interactive: bool,

    /// Generate a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Determine if interactive mode is enabled.
    ///
    /// Returns true if:
    /// - `--interactive` was explicitly set, OR
    /// - Neither `--no-interactive` nor `--quiet` was set AND stdin is a TTY
    pub fn interactive(&self) -> bool {
        if self.interactive_flag {
            true
        } else if self.no_interactive || self.quiet {
            false
        } else {
            std::io::stdin().is_terminal()
        }
    }
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[value(rename_all = "lower")]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
