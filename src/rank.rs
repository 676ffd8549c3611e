//! Shared leaderboard capability.
//!
//! The match ranks players by total wins, a round ranks them by round score.
//! Both share one ranking contract parameterized over the score key instead
//! of carrying two copies of the same sort.

use std::cmp::Reverse;

use crate::core::{PlayerId, Roster};

/// Rank the roster by a chosen numeric key.
pub trait Leaderboard {
    /// The key a player is ranked by.
    fn ranking_score(&self, roster: &Roster, player: PlayerId) -> u32;

    /// All players, highest key first.
    ///
    /// The sort is stable, so equal keys keep roster creation order. That
    /// stability is a contract, not an implementation detail: it is the
    /// tie-break rule for both round winners and the win leaderboard.
    fn leaderboard(&self, roster: &Roster) -> Vec<PlayerId> {
        let mut ranked: Vec<PlayerId> = roster.player_ids().collect();
        ranked.sort_by_key(|&player| Reverse(self.ranking_score(roster, player)));
        ranked
    }
}
