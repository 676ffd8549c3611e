//! Match configuration.
//!
//! Everything here is fixed when the match is created. Defaults mirror the
//! classic table setup: 4 players, 5 dice, 6-face dice, first to 7 round
//! wins.

use serde::{Deserialize, Serialize};

use crate::error::MatchError;

/// Match-wide constants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of players in the roster, including the human slot.
    pub player_count: usize,

    /// Dice each player rolls per turn.
    pub dice_count: usize,

    /// Die faces. A die lands uniformly in `0..=faces_per_die`, so a 6-face
    /// die has seven outcomes including zero; see `DieRoller`.
    pub faces_per_die: u8,

    /// Round wins needed to end the match.
    pub max_wins: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player_count: 4,
            dice_count: 5,
            faces_per_die: 6,
            max_wins: 7,
        }
    }
}

impl MatchConfig {
    /// Create a configuration with the given table size, keeping default
    /// dice faces and win threshold.
    #[must_use]
    pub fn new(player_count: usize, dice_count: usize) -> Self {
        Self {
            player_count,
            dice_count,
            ..Self::default()
        }
    }

    /// Set the die face count.
    #[must_use]
    pub fn with_faces_per_die(mut self, faces_per_die: u8) -> Self {
        self.faces_per_die = faces_per_die;
        self
    }

    /// Set the number of round wins that ends the match.
    #[must_use]
    pub fn with_max_wins(mut self, max_wins: u32) -> Self {
        self.max_wins = max_wins;
        self
    }

    /// Reject non-positive player or dice counts. Counts are never clamped.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.player_count < 1 {
            return Err(MatchError::InvalidConfiguration {
                detail: format!(
                    "player_count must be at least 1, got {}",
                    self.player_count
                ),
            });
        }
        if self.player_count > 255 {
            return Err(MatchError::InvalidConfiguration {
                detail: format!("at most 255 players supported, got {}", self.player_count),
            });
        }
        if self.dice_count < 1 {
            return Err(MatchError::InvalidConfiguration {
                detail: format!("dice_count must be at least 1, got {}", self.dice_count),
            });
        }
        Ok(())
    }
}
