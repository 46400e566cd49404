//! # dicematch CLI Library
//!
//! Terminal front end for the dicematch engine: collects the players, runs
//! the match and prints the trace.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments and executes the requested subcommand with
//! real stdin; [`run_with_input`] does the same with any buffered reader.
//!
//! ## Example Usage
//!
//! ```
//! use std::io::{self, Cursor};
//! let mut answers = Cursor::new(b"2\nAna\nBeto\n");
//! let code = dicematch_cli::run_with_input(
//!     ["dicematch", "play", "--seed", "42"],
//!     &mut answers,
//!     &mut io::sink(),
//!     &mut io::sink(),
//! );
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play one interactive match (the default)
//! - `sim`: Play many matches without prompts and summarize them
//! - `rng`: Print a sample of die faces for a seed
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, Write};

#[macro_use]
mod macros;

pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod setup;
pub mod ui;
pub mod validation;

use cli::{Commands, DicematchCli};
use commands::{handle_cfg_command, handle_play_command, handle_rng_command, handle_sim_command};

pub use cli::LogFormat;
pub use error::CliError;

/// Main entry point for the CLI application, reading answers from stdin.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` when input is abandoned
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Same as [`run`] with an explicit input stream for the prompts.
pub fn run_with_input<I, S>(
    args: I,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "sim", "rng", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match DicematchCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Usage: dicematch [command] [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: dicematch --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd.unwrap_or(Commands::Play {
        seed: None,
        format: None,
    }) {
        Commands::Play { seed, format } => config::load().map_err(CliError::from).and_then(|cfg| {
            handle_play_command(
                seed.or(cfg.seed),
                format.unwrap_or(cfg.format),
                cfg.max_players,
                out,
                err,
                stdin,
            )
        }),
        Commands::Sim {
            players,
            matches,
            seed,
        } => config::load().map_err(CliError::from).and_then(|cfg| {
            handle_sim_command(
                players,
                matches,
                seed.or(cfg.seed),
                cfg.max_players,
                out,
                err,
            )
        }),
        Commands::Rng { seed, count } => config::load()
            .map_err(CliError::from)
            .and_then(|cfg| handle_rng_command(seed.or(cfg.seed), count, out)),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(msg)) => {
            write_or_exit!(err, "\nMatch abandoned: {}", msg);
            exit_code::INTERRUPTED
        }
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Cursor;

    fn run_args(args: &[&str], input: &'static [u8]) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input);
        let code = run_with_input(args, &mut stdin, &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_cli_parses_every_subcommand() {
        for args in [
            vec!["dicematch"],
            vec!["dicematch", "play", "--seed", "1", "--format", "json"],
            vec!["dicematch", "sim", "--players", "3", "--matches", "5"],
            vec!["dicematch", "rng", "--count", "3"],
            vec!["dicematch", "cfg"],
        ] {
            assert!(
                DicematchCli::try_parse_from(&args).is_ok(),
                "Failed to parse: {:?}",
                args
            );
        }
    }

    #[test]
    #[serial]
    fn test_sim_rejects_zero_players() {
        let (code, _, err) = run_args(&["dicematch", "sim", "--players", "0"], b"");
        assert_eq!(code, exit_code::ERROR);
        assert!(err.contains("at least 1 player"));
    }

    #[test]
    #[serial]
    fn test_no_subcommand_plays_a_match() {
        let (code, out, _) = run_args(&["dicematch"], b"1\nSolo\n");
        assert_eq!(code, exit_code::SUCCESS);
        assert!(out.contains("Solo wins the match"));
    }

    #[test]
    #[serial]
    fn test_abandoned_input_exits_130() {
        let (code, _, err) = run_args(&["dicematch", "play"], b"");
        assert_eq!(code, exit_code::INTERRUPTED);
        assert!(err.contains("Match abandoned"));
    }

    #[test]
    fn test_unknown_command_lists_commands() {
        let (code, _, err) = run_args(&["dicematch", "deal"], b"");
        assert_eq!(code, exit_code::ERROR);
        assert!(err.contains("Commands:"));
        assert!(err.contains("  sim"));
    }

    #[test]
    fn test_help_goes_to_stdout() {
        let (code, out, _) = run_args(&["dicematch", "--help"], b"");
        assert_eq!(code, exit_code::SUCCESS);
        assert!(out.contains("play"));
    }

    #[test]
    #[serial]
    fn test_rng_command_dispatch() {
        let (code, out, _) = run_args(&["dicematch", "rng", "--seed", "5"], b"");
        assert_eq!(code, 0);
        assert!(out.contains("Die sample"));
    }
}
