//! Error taxonomy.
//!
//! Every variant reflects a caller contract violation or a one-time
//! configuration mistake, never a transient condition. There is no
//! recovery/retry model: errors propagate directly to the driving caller
//! and the engine suppresses nothing.

use thiserror::Error;

/// Errors surfaced by the match and round state machines.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    /// Match constructed with a non-positive player or dice count.
    /// Fatal to construction; counts are never silently clamped.
    #[error("invalid configuration: {detail}")]
    InvalidConfiguration { detail: String },

    /// `take_turn` called on a round whose pending queue is already empty.
    /// Silently ignoring this would corrupt win attribution, so it fails.
    #[error("no players left to roll this round")]
    NoPlayersLeft,

    /// A per-turn accessor was queried before any turn was taken in the
    /// round. Failing loudly keeps "no one has played yet" from being
    /// mistaken for an actual first-ranked player.
    #[error("no turn has been taken in this round yet")]
    RoundNotStarted,
}
