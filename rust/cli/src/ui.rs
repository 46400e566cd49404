//! Output helpers for messages that are not part of the game trace.
//!
//! Prompts, notices and errors all go to the error stream so that
//! stdout carries nothing but the trace.

use std::io::Write;

/// Shown when a player name has already been taken.
pub const DUPLICATE_NAME_NOTICE: &str =
    "This name has already been entered. Please choose another one.";

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Transient notice for the person at the keyboard
pub fn notify(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "NOTICE: {}", message)
}
