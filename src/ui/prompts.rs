//! ui::prompts
//!
//! Interactive prompts and confirmations.
//!
//! # Design
//!
//! Prompts are only shown in interactive mode. In non-interactive mode,
//! operations requiring user input must either have defaults or fail
//! with a clear error message. End of input (stdin closed) resolves to
//! the prompt's default, so a scripted run that answers only the first
//! few questions completes instead of hanging.

use std::io::{BufRead, Write};

use thiserror::Error;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("not in interactive mode")]
    NotInteractive,

    #[error("IO error: {0}")]
    IoError(String),
}

/// Prompt for confirmation (yes/no).
///
/// Returns `Ok(true)` if the user confirms, `Ok(false)` if they decline.
/// An empty answer or closed stdin resolves to `default`; in
/// non-interactive mode the default is returned without prompting.
pub fn confirm(message: &str, default: bool, interactive: bool) -> Result<bool, PromptError> {
    if !interactive {
        return Ok(default);
    }
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    loop {
        print!("{} {} ", message, hint);
        flush_stdout()?;
        let line = match read_line()? {
            Some(line) => line,
            None => return Ok(default),
        };
        match line.trim().to_ascii_lowercase().as_str() {
            "" => return Ok(default),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("Please answer yes or no."),
        }
    }
}

/// Prompt for a line of text input.
///
/// The prompt message is printed on its own line and the answer read from
/// the next stdin line. A closed stdin resolves to `default`. In
/// non-interactive mode the default is returned without prompting, or
/// `PromptError::NotInteractive` if there is none.
pub fn input(
    message: &str,
    default: Option<&str>,
    interactive: bool,
) -> Result<String, PromptError> {
    if !interactive {
        return default
            .map(str::to_string)
            .ok_or(PromptError::NotInteractive);
    }
    println!("{}", message);
    flush_stdout()?;
    match read_line()? {
        Some(line) => Ok(line),
        None => default
            .map(str::to_string)
            .ok_or(PromptError::NotInteractive),
    }
}

/// Read one line from stdin. `None` means end of input.
fn read_line() -> Result<Option<String>, PromptError> {
    let mut line = String::new();
    let bytes = std::io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|err| PromptError::IoError(err.to_string()))?;
    if bytes == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

fn flush_stdout() -> Result<(), PromptError> {
    std::io::stdout()
        .flush()
        .map_err(|err| PromptError::IoError(err.to_string()))
}
