//! Simulation command: many matches without prompts.
//!
//! Players are named `P1`..`PN` and every match is reseated, so the summary
//! shows how wins spread across players, how long matches run and how often
//! rounds end in a tie-break.
//!
//! # Examples
//!
//! ```no_run
//! use std::io;
//! let code = dicematch_cli::run(
//!     ["dicematch", "sim", "--players", "4", "--matches", "1000", "--seed", "7"],
//!     &mut io::stdout(),
//!     &mut io::stderr(),
//! );
//! assert_eq!(code, 0);
//! ```

use crate::error::CliError;
use crate::ui;
use crate::validation::validate_player_count;
use dicematch_engine::engine::MatchController;
use dicematch_engine::logger::GameEvent;
use dicematch_engine::player::Roster;
use std::io::Write;
use tracing::debug;

/// Handle the sim command.
///
/// # Arguments
///
/// * `players` - Players per match, `1..=max_players`
/// * `matches` - Matches to play (>= 1)
/// * `seed` - Base seed; match `i` is seeded with `seed + i`
/// * `max_players` - Table size limit shared with `play`
/// * `out` - Summary report
/// * `err` - Error messages
pub fn handle_sim_command(
    players: u32,
    matches: u32,
    seed: Option<u64>,
    max_players: u32,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if let Err(msg) = validate_player_count(i64::from(players), max_players) {
        ui::write_error(err, &msg)?;
        return Err(CliError::InvalidInput(msg));
    }
    if matches == 0 {
        ui::write_error(err, "matches must be >= 1")?;
        return Err(CliError::InvalidInput("matches must be >= 1".to_string()));
    }

    let base = seed.unwrap_or_else(rand::random);
    writeln!(
        out,
        "sim: players={} matches={} seed={}",
        players, matches, base
    )?;

    let names: Vec<String> = (1..=players).map(|i| format!("P{}", i)).collect();
    let mut wins = vec![0u32; names.len()];
    let mut tie_breaks = 0u64;
    let mut total_rounds = 0u64;
    let mut min_rounds = u32::MAX;
    let mut max_rounds = 0u32;

    for i in 0..matches {
        let roster = Roster::try_from(names.clone())?;
        let mut ctl = MatchController::seeded(roster, base.wrapping_add(u64::from(i)))?;
        let last = ctl.run()?;
        tie_breaks += ctl
            .take_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::TieDetected { .. }))
            .count() as u64;

        let seat = names
            .iter()
            .position(|n| *n == last.winner)
            .ok_or_else(|| CliError::Engine(format!("unknown winner {}", last.winner)))?;
        wins[seat] += 1;
        total_rounds += u64::from(last.round);
        min_rounds = min_rounds.min(last.round);
        max_rounds = max_rounds.max(last.round);
        debug!(index = i, winner = %last.winner, rounds = last.round, "simulated match");
    }

    writeln!(out, "Matches: {}", matches)?;
    writeln!(
        out,
        "Rounds per match: avg {:.2} (min {}, max {})",
        total_rounds as f64 / f64::from(matches),
        min_rounds,
        max_rounds
    )?;
    writeln!(out, "Tie-breaks: {}", tie_breaks)?;
    writeln!(out, "Wins:")?;
    for (name, w) in names.iter().zip(&wins) {
        writeln!(
            out,
            "  {}: {} ({:.1}%)",
            name,
            w,
            100.0 * f64::from(*w) / f64::from(matches)
        )?;
    }
    Ok(())
}
