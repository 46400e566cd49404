//! # dicematch-engine: Dice Match Rule Engine
//!
//! Rules for a multi-round, two-dice match between any number of local
//! players. Every roll goes through a [`dice::DiceSource`], so a match can be
//! played with a seeded ChaCha20 die or replayed from a fixed script.
//!
//! ## Rules in brief
//!
//! - Each turn throws two dice. (6,6) and (1,1) throw again from scratch,
//!   (5,5) scores zero, anything else scores the sum.
//! - The highest round total wins the round. A shared top score is settled
//!   with one extra die per tied player; the earliest player at the highest
//!   roll wins.
//! - The first player to win 3 rounds, with at least 3 rounds played, wins
//!   the match.
//!
//! ## Core Modules
//!
//! - [`dice`] - Die trait, seeded die and scripted dice
//! - [`rules`] - Pair classification and the match-over condition
//! - [`turn`] - Resolution of one player's turn
//! - [`round`] - Round play, winner scan and tie-break
//! - [`player`] - Player state and the distinct-name roster
//! - [`game`] - Match state
//! - [`engine`] - Match orchestration
//! - [`logger`] - Game trace events and match records
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use dicematch_engine::dice::DiceSource;
//! use dicematch_engine::turn::resolve_turn;
//!
//! struct Loaded(std::vec::IntoIter<u8>);
//!
//! impl DiceSource for Loaded {
//!     fn roll(&mut self) -> u8 {
//!         self.0.next().unwrap()
//!     }
//! }
//!
//! // (6,6) repeats the turn, so only (3,4) counts
//! let mut dice = Loaded(vec![6, 6, 3, 4].into_iter());
//! let mut log = Vec::new();
//! assert_eq!(resolve_turn(&mut dice, "Ana", &mut log), 7);
//! ```

pub mod dice;
pub mod engine;
pub mod errors;
pub mod game;
pub mod logger;
pub mod player;
pub mod round;
pub mod rules;
pub mod turn;
