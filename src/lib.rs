//! # dice-arena
//!
//! A turn-based dice match engine. N players each roll K dice per round; the
//! highest sum wins the round; the reversed round ranking becomes the next
//! round's turn order (winner rolls last, last place rolls first). The match
//! ends when a player reaches the configured number of round wins.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Randomness is an injected capability (`DieRoller`),
//!    never a process-wide singleton. Same seed, same match.
//!
//! 2. **Arena Ownership**: The match owns every `Player` in a `Roster`;
//!    rounds hold only `PlayerId` handles into it. No reference cycles.
//!
//! 3. **Pure Computation**: No I/O, no clocks, no threads. A driving caller
//!    loops `take_turn` / `start_next_round` until `is_over`; printing and
//!    argument handling live outside this crate.
//!
//! ## Modules
//!
//! - `core`: player arena, match configuration, dice RNG
//! - `rank`: shared leaderboard capability (rank by a chosen score key)
//! - `round`: one round's turn queue, scores, and next-round ordering
//! - `game`: the match state machine
//! - `error`: error taxonomy

pub mod core;
pub mod error;
pub mod game;
pub mod rank;
pub mod round;

// Re-export commonly used types
pub use crate::core::{
    DiceRng, DiceRngState, DiceRoll, DieRoller, FixedRolls, MatchConfig, Player, PlayerId, Roster,
};
pub use crate::error::MatchError;
pub use crate::game::Match;
pub use crate::rank::Leaderboard;
pub use crate::round::Round;
