use crate::logger::Standing;
use crate::player::Player;

/// State of a match in progress: seating, round counter and outcome.
#[derive(Debug, Clone)]
pub struct Match {
    /// Seating order, fixed once the first round starts
    players: Vec<Player>,
    /// Rounds completed so far
    round_number: u32,
    finished: bool,
    /// Index of the match winner once finished
    winner: Option<usize>,
    /// Index of each round's winner, in round order
    round_winners: Vec<usize>,
}

impl Match {
    pub(crate) fn new(players: Vec<Player>) -> Self {
        Self {
            players,
            round_number: 0,
            finished: false,
            winner: None,
            round_winners: Vec::new(),
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub(crate) fn players_mut(&mut self) -> &mut Vec<Player> {
        &mut self.players
    }
    pub fn round_number(&self) -> u32 {
        self.round_number
    }
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|i| &self.players[i])
    }

    pub fn round_winners(&self) -> impl Iterator<Item = &Player> + '_ {
        self.round_winners.iter().map(|&i| &self.players[i])
    }

    pub fn standings(&self) -> Vec<Standing> {
        self.players
            .iter()
            .map(|p| Standing {
                player: p.name().to_string(),
                rounds_won: p.rounds_won(),
            })
            .collect()
    }

    pub fn turn_order(&self) -> Vec<String> {
        self.players.iter().map(|p| p.name().to_string()).collect()
    }

    /// Start the next round: bump the counter and clear everyone's points.
    pub(crate) fn begin_round(&mut self) -> u32 {
        self.round_number += 1;
        for p in &mut self.players {
            p.reset_round_points();
        }
        self.round_number
    }

    pub(crate) fn credit(&mut self, index: usize) -> u32 {
        self.players[index].credit_round_win();
        self.round_winners.push(index);
        self.players[index].rounds_won()
    }

    pub(crate) fn finish(&mut self, winner: usize) {
        self.finished = true;
        self.winner = Some(winner);
    }
}
