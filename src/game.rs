//! The match state machine.
//!
//! A `Match` owns the roster arena, the die roller, and the single active
//! round, which it replaces wholesale between rounds. It gates round
//! creation and decides when the game is over; the rolling itself is
//! delegated to the current `Round`.

use crate::core::{DiceRng, DieRoller, MatchConfig, PlayerId, Roster};
use crate::error::MatchError;
use crate::rank::Leaderboard;
use crate::round::Round;

/// A full game: sequential rounds until a player reaches the configured
/// number of round wins.
///
/// Generic over the die roller so a scripted source can stand in for the
/// seeded one. A driving caller loops:
///
/// ```
/// use dice_arena::{Match, MatchConfig};
///
/// let config = MatchConfig::new(2, 1).with_max_wins(2);
/// let mut game = Match::new(config, 42).unwrap();
/// while !game.is_over() {
///     while game.current_round().has_pending_players() {
///         game.take_turn().unwrap();
///     }
///     game.start_next_round();
/// }
/// assert!(game.is_over());
/// ```
#[derive(Clone, Debug)]
pub struct Match<R = DiceRng> {
    config: MatchConfig,
    roster: Roster,
    round: Round,
    roller: R,
}

impl Match<DiceRng> {
    /// Create a match with the seeded production roller.
    ///
    /// Fails with `InvalidConfiguration` for non-positive player or dice
    /// counts. The first round starts immediately, in roster creation order.
    pub fn new(config: MatchConfig, seed: u64) -> Result<Self, MatchError> {
        Self::with_roller(config, DiceRng::new(seed))
    }
}

impl<R: DieRoller> Match<R> {
    /// Create a match rolling with `roller`.
    pub fn with_roller(config: MatchConfig, roller: R) -> Result<Self, MatchError> {
        config.validate()?;
        let mut roster = Roster::new(config.player_count);
        let first_order: Vec<PlayerId> = roster.player_ids().collect();
        let round = Round::new(&mut roster, first_order);
        Ok(Self {
            config,
            roster,
            round,
            roller,
        })
    }

    /// Match configuration.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// The player arena, in creation order.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The round currently in progress or just completed.
    #[must_use]
    pub fn current_round(&self) -> &Round {
        &self.round
    }

    /// Roll for the next pending player of the current round.
    ///
    /// See `Round::take_turn`; the roster and roller live here, so the turn
    /// is driven through the match.
    pub fn take_turn(&mut self) -> Result<PlayerId, MatchError> {
        self.round
            .take_turn(&mut self.roster, &mut self.roller, &self.config)
    }

    /// Start the next round, using the turn order the finished round
    /// computed.
    ///
    /// A no-op returning the existing round if the match is already over or
    /// the current round still has pending players.
    pub fn start_next_round(&mut self) -> &Round {
        if self.is_over() || self.round.has_pending_players() {
            return &self.round;
        }
        // A completed round always carries the next order; a round that
        // never completed was caught by the guard above.
        let order = match self.round.next_turn_order() {
            Some(order) => order.to_vec(),
            None => return &self.round,
        };
        self.round = Round::new(&mut self.roster, order);
        &self.round
    }

    /// All players sorted descending by total wins, ties keeping roster
    /// creation order.
    #[must_use]
    pub fn leaderboard(&self) -> Vec<PlayerId> {
        Leaderboard::leaderboard(self, &self.roster)
    }

    /// True iff the leading player has reached the win threshold.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.roster
            .iter()
            .map(|(_, player)| player.total_wins())
            .max()
            .is_some_and(|wins| wins >= self.config.max_wins)
    }
}

impl<R> Leaderboard for Match<R> {
    fn ranking_score(&self, roster: &Roster, player: PlayerId) -> u32 {
        roster.get(player).total_wins()
    }
}
