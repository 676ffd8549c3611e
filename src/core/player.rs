//! Player identity and the match-owned player arena.
//!
//! ## PlayerId
//!
//! Type-safe handle supporting 1-255 players. Indices are 0-based and double
//! as roster creation order, which is the canonical tie-break for every
//! leaderboard.
//!
//! ## Roster
//!
//! The match exclusively owns every `Player` here; rounds and callers refer
//! to players by `PlayerId` only. The creation order never changes after
//! construction: generated names first ("Player1".."PlayerN-1"), the human
//! slot ("Me") last.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Index;

/// Dice values from a single roll. Stays inline up to eight dice.
pub type DiceRoll = SmallVec<[u8; 8]>;

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a match with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player #{}", self.0)
    }
}

/// A dice player: identity plus per-round and per-match tallies.
///
/// `round_score` and `last_roll` describe the round in progress or just
/// completed; both are overwritten when the player rolls again. `total_wins`
/// persists for the whole match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    last_roll: DiceRoll,
    round_score: u32,
    total_wins: u32,
}

impl Player {
    fn new(name: String) -> Self {
        Self {
            name,
            last_roll: DiceRoll::new(),
            round_score: 0,
            total_wins: 0,
        }
    }

    /// Player name, unique within the match.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dice values from the player's most recent roll.
    #[must_use]
    pub fn last_roll(&self) -> &[u8] {
        &self.last_roll
    }

    /// Sum of `last_roll` for the current round.
    #[must_use]
    pub fn round_score(&self) -> u32 {
        self.round_score
    }

    /// Rounds won so far in this match.
    #[must_use]
    pub fn total_wins(&self) -> u32 {
        self.total_wins
    }

    pub(crate) fn reset_round_score(&mut self) {
        self.round_score = 0;
    }

    pub(crate) fn record_roll(&mut self, roll: DiceRoll, score: u32) {
        self.last_roll = roll;
        self.round_score = score;
    }

    pub(crate) fn award_win(&mut self) {
        self.total_wins += 1;
    }
}

/// The match-owned arena of players, in creation order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Build a roster of `player_count` players: "Player1".."PlayerN-1"
    /// followed by the fixed human slot "Me".
    ///
    /// Count validation against caller input happens in `MatchConfig`; the
    /// asserts here guard the arena's own bounds.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let mut players = Vec::with_capacity(player_count);
        for i in 1..player_count {
            players.push(Player::new(format!("Player{i}")));
        }
        players.push(Player::new("Me".to_string()));
        Self { players }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Get a reference to a player.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &Player {
        &self.players[player.index()]
    }

    pub(crate) fn get_mut(&mut self, player: PlayerId) -> &mut Player {
        &mut self.players[player.index()]
    }

    /// Iterate over (PlayerId, &Player) pairs in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players
            .iter()
            .enumerate()
            .map(|(i, p)| (PlayerId(i as u8), p))
    }

    /// Iterate over all player IDs in creation order.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.players.len() as u8).map(PlayerId)
    }
}

impl Index<PlayerId> for Roster {
    type Output = Player;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}
