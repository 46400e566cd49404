//! Human-readable rendering of the game trace.

use dicematch_engine::logger::{GameEvent, Standing};

/// Render one event as text. Some events span several lines.
///
/// # Example
///
/// ```rust
/// use dicematch_engine::logger::GameEvent;
/// use dicematch_cli::formatters::format_event;
///
/// let ev = GameEvent::Roll { player: "Ana".into(), dice: [3, 4] };
/// assert_eq!(format_event(&ev), "Ana rolls 3 and 4");
/// ```
pub fn format_event(event: &GameEvent) -> String {
    match event {
        GameEvent::TurnOrder { players } => {
            let mut s = String::from("Initial turn order:");
            for (i, name) in players.iter().enumerate() {
                s.push_str(&format!("\n  {}. {}", i + 1, name));
            }
            s
        }
        GameEvent::RoundStarted { round } => format!("\n--- Round {} ---", round),
        GameEvent::Roll { player, dice } => {
            format!("{} rolls {} and {}", player, dice[0], dice[1])
        }
        GameEvent::Repeat { player } => format!("{} rolls again.", player),
        GameEvent::Bust { player } => format!("{} cannot win this round.", player),
        GameEvent::TurnScored { player, total, .. } => {
            format!("{} has {} points in total.", player, total)
        }
        GameEvent::TieDetected { players, points } => format!(
            "Tie at {} points between {}. Each rolls one extra die.",
            points,
            players.join(", ")
        ),
        GameEvent::TieBreakRoll { player, roll } => {
            format!("{} rolls a {} in the tie-break.", player, roll)
        }
        GameEvent::RoundWon { player, .. } => format!("{} wins the round.", player),
        GameEvent::Scoreboard { standings } => format_scoreboard(standings),
        GameEvent::MatchWon {
            player,
            rounds_won,
            rounds_played,
        } => format!(
            "{} wins the match with {} rounds won after {} rounds.",
            player, rounds_won, rounds_played
        ),
    }
}

pub fn format_scoreboard(standings: &[Standing]) -> String {
    let mut s = String::from("Rounds won:");
    for st in standings {
        s.push_str(&format!("\n  {}: {}", st.player, st.rounds_won));
    }
    s
}
