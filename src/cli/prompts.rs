//! Centralized warning and error messages for CLI output.

use std::io::{self, Write};

use crossterm::style::Stylize;

/// Write a warning (yellow). Callers decide whether quiet mode applies.
pub fn warn<W: Write>(err: &mut W, msg: &str) -> io::Result<()> {
    writeln!(err, "{}", msg.yellow())
}

/// Print an error to stderr (red). Never suppressed.
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

pub fn large_length<W: Write>(err: &mut W, threshold: usize) -> io::Result<()> {
    warn(err, &large_length_message(threshold))
}

pub fn large_length_message(threshold: usize) -> String {
    format!(
        "Warning: generating an extremely long password (over {threshold} characters) may consume significant memory and time."
    )
}
