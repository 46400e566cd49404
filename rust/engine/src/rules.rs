/// Round wins needed to take the match.
pub const ROUNDS_TO_WIN: u32 = 3;

/// Rounds that must be played before the match can end.
pub const MIN_ROUNDS: u32 = 3;

/// What a pair of dice means for the turn in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOutcome {
    /// (6,6) or (1,1): discard the pair and roll again from scratch.
    Repeat,
    /// (5,5): the turn scores zero and ends.
    Bust,
    /// Any other pair scores its sum.
    Score(u32),
}

pub fn classify_pair(d1: u8, d2: u8) -> PairOutcome {
    match (d1, d2) {
        (6, 6) | (1, 1) => PairOutcome::Repeat,
        (5, 5) => PairOutcome::Bust,
        _ => PairOutcome::Score(u32::from(d1) + u32::from(d2)),
    }
}

/// Checked right after the round winner has been credited.
pub fn is_match_over(round_number: u32, winner_rounds_won: u32) -> bool {
    round_number >= MIN_ROUNDS && winner_rounds_won >= ROUNDS_TO_WIN
}
