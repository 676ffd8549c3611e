//! One round of play: the turn queue, per-round scores, and the ordering
//! handed to the next round.
//!
//! A round is driven turn by turn from outside; it never loops on its own.
//! When the last pending player has rolled, the round ranks the roster by
//! round score, awards the winner a match win, and records the reversed
//! ranking as the next round's turn order (winner rolls last, last place
//! rolls first). That completion step runs exactly once, triggered by queue
//! exhaustion, never by an external call.

use serde::{Deserialize, Serialize};

use crate::core::{DiceRoll, DieRoller, MatchConfig, PlayerId, Roster};
use crate::error::MatchError;
use crate::rank::Leaderboard;

/// A single round. Every player in `turn_order` rolls exactly once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Fixed for the lifetime of the round.
    turn_order: Vec<PlayerId>,

    /// Players yet to roll, stored as a stack with the next roller on top,
    /// so pops reproduce `turn_order` front to back.
    pending: Vec<PlayerId>,

    /// Most recent roller. `None` until the first turn is taken.
    active: Option<PlayerId>,

    winner: Option<PlayerId>,
    next_turn_order: Option<Vec<PlayerId>>,
}

impl Round {
    /// Start a round over `turn_order`, resetting every participant's round
    /// score. `turn_order` must be a permutation of the roster.
    #[must_use]
    pub fn new(roster: &mut Roster, turn_order: Vec<PlayerId>) -> Self {
        for &player in &turn_order {
            roster.get_mut(player).reset_round_score();
        }
        let pending: Vec<PlayerId> = turn_order.iter().rev().copied().collect();
        Self {
            turn_order,
            pending,
            active: None,
            winner: None,
            next_turn_order: None,
        }
    }

    /// Roll for the next pending player.
    ///
    /// Pops the player, rolls `dice_count` dice each uniform over
    /// `0..=faces_per_die`, records the roll and its sum, and marks the
    /// player active. If this drained the queue, the round completes: the
    /// winner gets a match win and the next turn order is fixed.
    ///
    /// Returns the player who rolled, or `NoPlayersLeft` if the round was
    /// already complete.
    pub fn take_turn<R: DieRoller>(
        &mut self,
        roster: &mut Roster,
        roller: &mut R,
        config: &MatchConfig,
    ) -> Result<PlayerId, MatchError> {
        let player = self.pending.pop().ok_or(MatchError::NoPlayersLeft)?;

        let mut roll = DiceRoll::new();
        let mut score = 0u32;
        for _ in 0..config.dice_count {
            let value = roller.roll(config.faces_per_die);
            score += u32::from(value);
            roll.push(value);
        }
        roster.get_mut(player).record_roll(roll, score);
        self.active = Some(player);

        if self.pending.is_empty() {
            self.complete(roster);
        }
        Ok(player)
    }

    /// Runs exactly once, when the queue drains.
    fn complete(&mut self, roster: &mut Roster) {
        let mut board = self.leaderboard(roster);
        let winner = board[0];
        roster.get_mut(winner).award_win();
        self.winner = Some(winner);
        board.reverse();
        self.next_turn_order = Some(board);
    }

    /// True while players are still waiting to roll.
    #[must_use]
    pub fn has_pending_players(&self) -> bool {
        !self.pending.is_empty()
    }

    /// The order players roll in this round.
    #[must_use]
    pub fn turn_order(&self) -> &[PlayerId] {
        &self.turn_order
    }

    /// The round winner. `None` until the round completes.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Turn order for the following round: the reverse of this round's
    /// final ranking. `None` until the round completes.
    #[must_use]
    pub fn next_turn_order(&self) -> Option<&[PlayerId]> {
        self.next_turn_order.as_deref()
    }

    /// The player who took the most recent turn.
    ///
    /// Errors with `RoundNotStarted` before the first turn, rather than
    /// pointing at anyone by default.
    pub fn active_player(&self) -> Result<PlayerId, MatchError> {
        self.active.ok_or(MatchError::RoundNotStarted)
    }

    /// Dice values from `player`'s most recent roll.
    ///
    /// Errors with `RoundNotStarted` before any turn has been taken in this
    /// round.
    pub fn last_roll_of<'r>(
        &self,
        roster: &'r Roster,
        player: PlayerId,
    ) -> Result<&'r [u8], MatchError> {
        self.active.ok_or(MatchError::RoundNotStarted)?;
        Ok(roster.get(player).last_roll())
    }

    /// `player`'s score this round.
    ///
    /// Errors with `RoundNotStarted` before any turn has been taken in this
    /// round.
    pub fn round_score_of(&self, roster: &Roster, player: PlayerId) -> Result<u32, MatchError> {
        self.active.ok_or(MatchError::RoundNotStarted)?;
        Ok(roster.get(player).round_score())
    }
}

impl Leaderboard for Round {
    fn ranking_score(&self, roster: &Roster, player: PlayerId) -> u32 {
        roster.get(player).round_score()
    }
}
