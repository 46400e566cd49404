//! Collecting the players before a match.
//!
//! Prompts and notices go to `prompt_out`. Invalid counts and names are
//! reported and asked again; a closed input stream aborts setup.

use std::io::{BufRead, Write};

use dicematch_engine::errors::GameError;
use dicematch_engine::player::Roster;
use tracing::debug;

use crate::error::CliError;
use crate::io_utils::{prompt_integer, prompt_string};
use crate::ui;
use crate::validation::{validate_player_count, validate_player_name};

pub fn ask_player_count(
    stdin: &mut dyn BufRead,
    prompt_out: &mut dyn Write,
    max_players: u32,
) -> Result<usize, CliError> {
    loop {
        let msg = match prompt_integer(stdin, prompt_out, "How many players will take part?") {
            Ok(n) => match validate_player_count(n, max_players) {
                Ok(count) => return Ok(count),
                Err(msg) => msg,
            },
            Err(CliError::InvalidInput(msg)) => msg,
            Err(e) => return Err(e),
        };
        ui::write_error(prompt_out, &msg)?;
    }
}

/// Ask for `count` distinct names. A duplicate triggers a notice and the same
/// slot is asked again.
pub fn collect_roster(
    stdin: &mut dyn BufRead,
    prompt_out: &mut dyn Write,
    count: usize,
) -> Result<Roster, CliError> {
    let mut roster = Roster::new();
    while roster.len() < count {
        let prompt = format!("Enter the name of player {}", roster.len() + 1);
        let name = match prompt_string(stdin, prompt_out, &prompt) {
            Ok(name) => name,
            Err(CliError::InvalidInput(msg)) => {
                ui::write_error(prompt_out, &msg)?;
                continue;
            }
            Err(e) => return Err(e),
        };
        if let Err(msg) = validate_player_name(&name) {
            ui::write_error(prompt_out, &msg)?;
            continue;
        }
        match roster.try_add(name) {
            Ok(()) => {}
            Err(GameError::DuplicateName(name)) => {
                debug!(name = %name, "duplicate name rejected");
                ui::notify(prompt_out, ui::DUPLICATE_NAME_NOTICE)?;
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(roster)
}
