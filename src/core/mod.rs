//! Core engine types: player arena, configuration, dice RNG.
//!
//! These are the building blocks the round and match state machines are
//! assembled from. Nothing here decides turn order or win attribution.

pub mod config;
pub mod player;
pub mod rng;

pub use config::MatchConfig;
pub use player::{DiceRoll, Player, PlayerId, Roster};
pub use rng::{DiceRng, DiceRngState, DieRoller, FixedRolls};
