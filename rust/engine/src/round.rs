//! One round of play: every player's turn, then the round winner.

use tracing::debug;

use crate::dice::DiceSource;
use crate::logger::GameEvent;
use crate::player::Player;
use crate::turn::resolve_turn;

/// Outcome of the winner scan for a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundWinner {
    /// Index into the player slice
    pub index: usize,
    /// Indices of everyone who shared the top score (just `index` when unique)
    pub tied: Vec<usize>,
}

/// Give every player one turn, in seating order, adding the score to their
/// round points. Round points are expected to have been reset already.
pub fn play_round<D: DiceSource + ?Sized>(
    players: &mut [Player],
    dice: &mut D,
    log: &mut Vec<GameEvent>,
) {
    for player in players.iter_mut() {
        let points = resolve_turn(dice, player.name(), log);
        player.add_points(points);
        log.push(GameEvent::TurnScored {
            player: player.name().to_string(),
            points,
            total: player.round_points(),
        });
    }
}

/// Indices of the players holding the top round score, in seating order.
pub fn leaders(players: &[Player]) -> Vec<usize> {
    let Some(first) = players.first() else {
        return Vec::new();
    };
    let mut best = first.round_points();
    let mut tied = vec![0];
    for (i, p) in players.iter().enumerate().skip(1) {
        if p.round_points() > best {
            best = p.round_points();
            tied.clear();
            tied.push(i);
        } else if p.round_points() == best {
            tied.push(i);
        }
    }
    tied
}

/// Pick the round winner, going to a tie-break only when the top score is
/// shared. Returns `None` for an empty slice.
pub fn find_round_winner<D: DiceSource + ?Sized>(
    players: &[Player],
    dice: &mut D,
    log: &mut Vec<GameEvent>,
) -> Option<RoundWinner> {
    let tied = leaders(players);
    let &first = tied.first()?;
    if tied.len() == 1 {
        return Some(RoundWinner { index: first, tied });
    }

    log.push(GameEvent::TieDetected {
        players: tied.iter().map(|&i| players[i].name().to_string()).collect(),
        points: players[first].round_points(),
    });
    let index = break_tie(players, &tied, dice, log)?;
    Some(RoundWinner { index, tied })
}

/// One extra die per tied player. A roll replaces the leader only when it is
/// strictly higher, so the earliest player at the top roll wins.
pub fn break_tie<D: DiceSource + ?Sized>(
    players: &[Player],
    tied: &[usize],
    dice: &mut D,
    log: &mut Vec<GameEvent>,
) -> Option<usize> {
    let mut best = 0u8;
    let mut winner = None;
    for &i in tied {
        let roll = dice.roll();
        log.push(GameEvent::TieBreakRoll {
            player: players[i].name().to_string(),
            roll,
        });
        if roll > best {
            best = roll;
            winner = Some(i);
        }
    }
    debug!(?winner, best, "tie-break resolved");
    winner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;

    fn with_points(points: &[u32]) -> Vec<Player> {
        points
            .iter()
            .enumerate()
            .map(|(i, &pts)| {
                let mut p = Player::new(format!("P{}", i + 1));
                p.add_points(pts);
                p
            })
            .collect()
    }

    #[test]
    fn leaders_tracks_running_max() {
        assert_eq!(leaders(&with_points(&[5, 9, 3, 9])), vec![1, 3]);
        assert_eq!(leaders(&with_points(&[9, 5, 9, 12])), vec![3]);
        assert_eq!(leaders(&with_points(&[0, 0])), vec![0, 1]);
        assert!(leaders(&[]).is_empty());
    }

    #[test]
    fn unique_max_wins_without_rolling() {
        let players = with_points(&[4, 11, 8]);
        let mut dice = ScriptedDice::new(Vec::<u8>::new());
        let mut log = Vec::new();
        let w = find_round_winner(&players, &mut dice, &mut log).unwrap();
        assert_eq!(w.index, 1);
        assert_eq!(w.tied, vec![1]);
        assert!(log.is_empty(), "no tie-break expected");
    }

    #[test]
    fn three_way_tie_goes_to_first_at_top_roll() {
        let players = with_points(&[7, 7, 7]);
        let mut dice = ScriptedDice::new(vec![4, 6, 6]);
        let mut log = Vec::new();
        let w = find_round_winner(&players, &mut dice, &mut log).unwrap();
        assert_eq!(w.tied, vec![0, 1, 2]);
        assert_eq!(w.index, 1);
        assert_eq!(
            log[0],
            GameEvent::TieDetected {
                players: vec!["P1".into(), "P2".into(), "P3".into()],
                points: 7
            }
        );
        assert_eq!(log.len(), 4);
    }

    #[test]
    fn tie_break_only_involves_tied_subset() {
        let players = with_points(&[10, 3, 10]);
        let mut dice = ScriptedDice::new(vec![2, 5]);
        let mut log = Vec::new();
        let w = find_round_winner(&players, &mut dice, &mut log).unwrap();
        assert_eq!(w.tied, vec![0, 2]);
        assert_eq!(w.index, 2);
        let rollers: Vec<&str> = log
            .iter()
            .filter_map(|e| match e {
                GameEvent::TieBreakRoll { player, .. } => Some(player.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(rollers, vec!["P1", "P3"]);
    }

    #[test]
    fn tie_break_winner_rolled_highest() {
        let players = with_points(&[6, 6, 6, 6]);
        let rolls = [3u8, 5, 1, 5];
        let mut dice = ScriptedDice::new(rolls.to_vec());
        let mut log = Vec::new();
        let winner = break_tie(&players, &[0, 1, 2, 3], &mut dice, &mut log).unwrap();
        assert_eq!(winner, 1);
        assert!(rolls.iter().all(|&r| rolls[winner] >= r));
    }

    #[test]
    fn play_round_adds_scores_in_seating_order() {
        let mut players = with_points(&[0, 0]);
        let mut dice = ScriptedDice::new(vec![2, 3, 5, 5]);
        let mut log = Vec::new();
        play_round(&mut players, &mut dice, &mut log);
        assert_eq!(players[0].round_points(), 5);
        assert_eq!(players[1].round_points(), 0);
        assert_eq!(
            log.last(),
            Some(&GameEvent::TurnScored {
                player: "P2".into(),
                points: 0,
                total: 0
            })
        );
    }
}
