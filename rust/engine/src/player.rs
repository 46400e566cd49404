use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::errors::GameError;

/// A named participant in a match.
/// `round_points` is only meaningful within the current round; `rounds_won`
/// only ever grows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique within a match
    name: String,
    /// Points scored in the round in progress
    round_points: u32,
    /// Rounds credited to this player so far
    rounds_won: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            round_points: 0,
            rounds_won: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn round_points(&self) -> u32 {
        self.round_points
    }
    pub fn rounds_won(&self) -> u32 {
        self.rounds_won
    }

    pub fn reset_round_points(&mut self) {
        self.round_points = 0;
    }

    pub fn add_points(&mut self, points: u32) {
        self.round_points = self.round_points.saturating_add(points);
    }

    pub fn credit_round_win(&mut self) {
        self.rounds_won += 1;
    }
}

/// Collects distinct player names in order of first acceptance.
#[derive(Debug, Default, Clone)]
pub struct Roster {
    seen: HashSet<String>,
    names: Vec<String>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept `name` unless it is empty or already present. Names are compared
    /// exactly; surrounding whitespace is the caller's concern.
    pub fn try_add(&mut self, name: impl Into<String>) -> Result<(), GameError> {
        let name = name.into();
        if name.is_empty() {
            return Err(GameError::EmptyName);
        }
        if !self.seen.insert(name.clone()) {
            return Err(GameError::DuplicateName(name));
        }
        self.names.push(name);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn into_players(self) -> Vec<Player> {
        self.names.into_iter().map(Player::new).collect()
    }
}

impl TryFrom<Vec<String>> for Roster {
    type Error = GameError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        let mut roster = Roster::new();
        for name in names {
            roster.try_add(name)?;
        }
        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_reset_but_wins_accumulate() {
        let mut p = Player::new("Ana");
        p.add_points(7);
        p.credit_round_win();
        p.reset_round_points();
        p.add_points(4);
        p.credit_round_win();
        assert_eq!(p.round_points(), 4);
        assert_eq!(p.rounds_won(), 2);
    }

    #[test]
    fn roster_rejects_duplicates_and_keeps_order() {
        let mut roster = Roster::new();
        roster.try_add("Beto").unwrap();
        roster.try_add("Ana").unwrap();
        assert_eq!(
            roster.try_add("Beto"),
            Err(GameError::DuplicateName("Beto".into()))
        );
        roster.try_add("Cris").unwrap();
        let names: Vec<String> = roster
            .into_players()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, vec!["Beto", "Ana", "Cris"]);
    }

    #[test]
    fn roster_rejects_empty_name() {
        let mut roster = Roster::new();
        assert_eq!(roster.try_add(""), Err(GameError::EmptyName));
        assert!(roster.is_empty());
    }
}
