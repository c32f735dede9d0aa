//! Seeded randomness for the fallback move.
//!
//! `random_candidate` draws from a ChaCha8 stream seeded by the agent
//! config. The stream position can be captured and restored, so a resumed
//! game keeps making the same guesses.
//!
//! ```
//! use minesweeper_ai::core::AgentRng;
//!
//! let mut rng1 = AgentRng::new(42);
//! let mut rng2 = AgentRng::new(42);
//!
//! let cells = [1, 2, 3, 4, 5];
//! assert_eq!(rng1.choose(&cells), rng2.choose(&cells));
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Random source for guesses. Same seed, same guesses.
#[derive(Clone, Debug)]
pub struct AgentRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl AgentRng {
    /// Seed a fresh stream.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Uniform pick from `slice`, `None` if it is empty.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Capture the stream position.
    #[must_use]
    pub fn state(&self) -> AgentRngState {
        AgentRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Resume a stream at a captured position.
    #[must_use]
    pub fn from_state(state: &AgentRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Captured position of an [`AgentRng`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRngState {
    pub seed: u64,
    /// Words consumed from the ChaCha8 stream since seeding.
    pub word_pos: u128,
}
