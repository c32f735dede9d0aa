//! Agent configuration.
//!
//! Board dimensions are supplied once when the agent is created and
//! never change. The seed drives `random_candidate`, so two agents built
//! from the same config make the same random choices.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Configuration for a [`KnowledgeAgent`](crate::knowledge::KnowledgeAgent).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Number of board rows.
    pub height: usize,

    /// Number of board columns.
    pub width: usize,

    /// Seed for the random candidate source.
    pub seed: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            height: 8,
            width: 8,
            seed: 42,
        }
    }
}

impl AgentConfig {
    /// Create a config for a `height` x `width` board with the default seed.
    #[must_use]
    pub fn new(height: usize, width: usize) -> Self {
        Self::default().with_dimensions(height, width)
    }

    /// Set board dimensions.
    #[must_use]
    pub fn with_dimensions(mut self, height: usize, width: usize) -> Self {
        self.height = height;
        self.width = width;
        self
    }

    /// Set the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Total number of cells, or `None` if it overflows `usize`.
    #[must_use]
    pub fn cell_count(&self) -> Option<usize> {
        self.height.checked_mul(self.width)
    }

    /// Check that the board has at least one cell and is addressable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height == 0 || self.width == 0 {
            return Err(ConfigError::EmptyBoard {
                height: self.height,
                width: self.width,
            });
        }
        if self.cell_count().is_none() {
            return Err(ConfigError::BoardTooLarge {
                height: self.height,
                width: self.width,
            });
        }
        Ok(())
    }
}
