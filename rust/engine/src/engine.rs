use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info};

use crate::dice::{DiceSource, Die};
use crate::errors::GameError;
use crate::game::Match;
use crate::logger::{GameEvent, MatchRecord};
use crate::player::{Player, Roster};
use crate::round::{find_round_winner, play_round, RoundWinner};
use crate::rules::is_match_over;

/// Result of a single round as seen by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    pub round: u32,
    pub winner: String,
    /// Everyone who shared the top score; one name when there was no tie
    pub tied: Vec<String>,
    /// True when this round ended the match
    pub finished: bool,
}

/// Drives a match from seating to the final winner.
///
/// Each call to [`MatchController::play_round`] plays one full round; the
/// trace of what happened accumulates until drained with
/// [`MatchController::take_events`].
///
/// # Examples
///
/// ```
/// use dicematch_engine::engine::MatchController;
/// use dicematch_engine::player::Roster;
///
/// let roster = Roster::try_from(vec!["Ana".to_string(), "Beto".to_string()]).unwrap();
/// let mut ctl = MatchController::seeded(roster, 42).unwrap();
/// let last = ctl.run().unwrap();
///
/// assert!(last.finished);
/// assert!(ctl.state().round_number() >= 3);
/// assert_eq!(ctl.state().winner().unwrap().rounds_won(), 3);
/// ```
#[derive(Debug)]
pub struct MatchController<D: DiceSource> {
    state: Match,
    dice: D,
    seed: Option<u64>,
    events: Vec<GameEvent>,
}

impl MatchController<Die> {
    /// Shuffle the roster and roll dice from one ChaCha20 stream seeded with
    /// `seed`, so the whole match is reproducible.
    pub fn seeded(roster: Roster, seed: u64) -> Result<Self, GameError> {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut players = roster.into_players();
        players.shuffle(&mut rng);
        let mut ctl = Self::from_players(players, Die::from_rng(rng))?;
        ctl.seed = Some(seed);
        Ok(ctl)
    }
}

impl<D: DiceSource> MatchController<D> {
    /// Seat the roster in the order the names were accepted.
    pub fn new(roster: Roster, dice: D) -> Result<Self, GameError> {
        Self::from_players(roster.into_players(), dice)
    }

    fn from_players(players: Vec<Player>, dice: D) -> Result<Self, GameError> {
        if players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        Ok(Self {
            state: Match::new(players),
            dice,
            seed: None,
            events: Vec::new(),
        })
    }

    /// Uniformly reshuffle the seating. Only allowed before round one.
    pub fn shuffle_order<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        if self.state.round_number() > 0 {
            return Err(GameError::MatchStarted);
        }
        self.state.players_mut().shuffle(rng);
        Ok(())
    }

    pub fn state(&self) -> &Match {
        &self.state
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Drain the trace recorded since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn play_round(&mut self) -> Result<RoundReport, GameError> {
        if self.state.is_finished() {
            return Err(GameError::MatchFinished {
                round: self.state.round_number(),
            });
        }
        if self.state.round_number() == 0 {
            self.events.push(GameEvent::TurnOrder {
                players: self.state.turn_order(),
            });
        }

        let round = self.state.begin_round();
        self.events.push(GameEvent::RoundStarted { round });

        play_round(self.state.players_mut(), &mut self.dice, &mut self.events);
        let RoundWinner { index, tied } =
            find_round_winner(self.state.players(), &mut self.dice, &mut self.events)
                .ok_or(GameError::NoPlayers)?;

        let rounds_won = self.state.credit(index);
        let winner = self.state.players()[index].name().to_string();
        debug!(round, winner = %winner, rounds_won, "round finished");
        self.events.push(GameEvent::RoundWon {
            round,
            player: winner.clone(),
        });
        self.events.push(GameEvent::Scoreboard {
            standings: self.state.standings(),
        });

        let finished = is_match_over(round, rounds_won);
        if finished {
            self.state.finish(index);
            info!(winner = %winner, rounds = round, "match finished");
            self.events.push(GameEvent::MatchWon {
                player: winner.clone(),
                rounds_won,
                rounds_played: round,
            });
        }

        Ok(RoundReport {
            round,
            tied: tied
                .iter()
                .map(|&i| self.state.players()[i].name().to_string())
                .collect(),
            winner,
            finished,
        })
    }

    /// Play rounds until the match ends and return the deciding round.
    pub fn run(&mut self) -> Result<RoundReport, GameError> {
        loop {
            let report = self.play_round()?;
            if report.finished {
                return Ok(report);
            }
        }
    }

    /// Summary of the match, available once it has finished.
    pub fn record(&self, match_id: String) -> Option<MatchRecord> {
        let winner = self.state.winner()?;
        Some(MatchRecord {
            match_id,
            seed: self.seed,
            turn_order: self.state.turn_order(),
            rounds_played: self.state.round_number(),
            round_winners: self
                .state
                .round_winners()
                .map(|p| p.name().to_string())
                .collect(),
            standings: self.state.standings(),
            winner: winner.name().to_string(),
            ts: None,
        })
    }
}
