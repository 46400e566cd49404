//! # Play Command
//!
//! One interactive match from setup to the final winner.
//!
//! Setup prompts (player count, names) and notices are written to the error
//! stream; the game trace is written to the output stream, either as text or
//! as JSON lines followed by the match record.

use crate::cli::LogFormat;
use crate::error::CliError;
use crate::formatters::format_event;
use crate::setup::{ask_player_count, collect_roster};
use dicematch_engine::engine::MatchController;
use dicematch_engine::logger::{GameEvent, MatchIds};
use std::io::{BufRead, Write};
use tracing::info;

/// Handle the play command: run one match end to end.
///
/// # Arguments
///
/// * `seed` - Seed for seating and dice (default: random)
/// * `format` - Trace format for `out`
/// * `max_players` - Upper bound accepted at the player-count prompt
/// * `out` - Game trace
/// * `err` - Prompts, notices and errors
/// * `stdin` - Answers to the prompts
///
/// # Returns
///
/// * `Ok(())` once a match winner has been printed
/// * `Err(CliError::Interrupted)` if input closes during setup
pub fn handle_play_command(
    seed: Option<u64>,
    format: LogFormat,
    max_players: u32,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    if format == LogFormat::Text {
        writeln!(out, "play: seed={}", seed)?;
    }

    let count = ask_player_count(stdin, err, max_players)?;
    let roster = collect_roster(stdin, err, count)?;
    info!(players = count, seed, "match starting");

    let mut ctl = MatchController::seeded(roster, seed)?;
    loop {
        let report = ctl.play_round()?;
        write_events(out, format, &ctl.take_events())?;
        if report.finished {
            break;
        }
    }

    if format == LogFormat::Json {
        let mut record = ctl
            .record(MatchIds::today().next_id())
            .ok_or_else(|| CliError::Engine("match ended without a winner".into()))?;
        record.stamp();
        let line = record.to_json_line().map_err(std::io::Error::other)?;
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn write_events(
    out: &mut dyn Write,
    format: LogFormat,
    events: &[GameEvent],
) -> Result<(), CliError> {
    for ev in events {
        match format {
            LogFormat::Text => writeln!(out, "{}", format_event(ev))?,
            LogFormat::Json => {
                let line = serde_json::to_string(ev).map_err(std::io::Error::other)?;
                writeln!(out, "{}", line)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
