//! Deterministic dice rolling.
//!
//! Randomness is a capability handed to the match at construction, never a
//! process-wide global. `DieRoller` is the narrow contract the engine needs:
//! one uniformly distributed integer per die. `DiceRng` is the seeded
//! production source; `FixedRolls` replays a scripted sequence for tests
//! and replays.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of individual die values.
///
/// A die lands uniformly in `0..=faces_per_die`, so a 6-face die has seven
/// possible outcomes including zero. That is the table's historical rule,
/// preserved on purpose; implementations must honor the range exactly.
pub trait DieRoller {
    /// Roll one die, returning a value in `0..=faces_per_die`.
    fn roll(&mut self, faces_per_die: u8) -> u8;
}

/// Seeded ChaCha8-backed roller. Same seed, same match.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness.
#[derive(Clone, Debug)]
pub struct DiceRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DiceRng {
    /// Create a new roller with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Get the current state for checkpointing.
    ///
    /// O(1) regardless of how many dice have been rolled.
    #[must_use]
    pub fn state(&self) -> DiceRngState {
        DiceRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &DiceRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl DieRoller for DiceRng {
    fn roll(&mut self, faces_per_die: u8) -> u8 {
        self.inner.gen_range(0..=faces_per_die)
    }
}

/// Serializable roller state for checkpointing.
///
/// Uses the ChaCha8 word position so capture is O(1) regardless of how many
/// values have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Scripted roller: hands out the queued values front to back.
///
/// Intended for tests and replays where exact die values matter.
///
/// # Panics
///
/// Panics if the script runs dry; rolling more dice than were scripted is a
/// bug in the driving code, not a condition to recover from.
#[derive(Clone, Debug, Default)]
pub struct FixedRolls {
    values: VecDeque<u8>,
}

impl FixedRolls {
    /// Create a scripted roller from a value sequence.
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = u8>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Number of scripted values not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl DieRoller for FixedRolls {
    fn roll(&mut self, _faces_per_die: u8) -> u8 {
        self.values.pop_front().expect("scripted rolls exhausted")
    }
}
