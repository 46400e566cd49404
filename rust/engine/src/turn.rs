use tracing::debug;

use crate::dice::DiceSource;
use crate::logger::GameEvent;
use crate::rules::{classify_pair, PairOutcome};

/// Play one player's turn and return its score.
///
/// Repeat pairs discard everything rolled so far and start over, so only the
/// last pair thrown counts. The player is not mutated; the caller adds the
/// returned score.
pub fn resolve_turn<D: DiceSource + ?Sized>(
    dice: &mut D,
    player: &str,
    log: &mut Vec<GameEvent>,
) -> u32 {
    loop {
        let d1 = dice.roll();
        let d2 = dice.roll();
        debug!(player, d1, d2, "turn roll");
        log.push(GameEvent::Roll {
            player: player.to_string(),
            dice: [d1, d2],
        });

        match classify_pair(d1, d2) {
            PairOutcome::Repeat => {
                log.push(GameEvent::Repeat {
                    player: player.to_string(),
                });
            }
            PairOutcome::Bust => {
                log.push(GameEvent::Bust {
                    player: player.to_string(),
                });
                return 0;
            }
            PairOutcome::Score(points) => return points,
        }
    }
}
