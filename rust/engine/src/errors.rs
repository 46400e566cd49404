use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("A match needs at least one player")]
    NoPlayers,
    #[error("Player name '{0}' is already taken")]
    DuplicateName(String),
    #[error("Player name must not be empty")]
    EmptyName,
    #[error("Turn order can only change before the first round")]
    MatchStarted,
    #[error("Match already finished after round {round}")]
    MatchFinished { round: u32 },
}
