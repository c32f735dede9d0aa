//! Error types.
//!
//! The inference engine itself never fails: inconsistent observations are
//! a caller contract violation and are not detected. Errors only arise at
//! the edges, when validating a configuration or restoring a snapshot.

use thiserror::Error;

use super::cell::Cell;

/// Invalid [`AgentConfig`](super::AgentConfig).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board must have at least one cell, got {height}x{width}")]
    EmptyBoard { height: usize, width: usize },

    #[error("board of {height}x{width} cells is not addressable")]
    BoardTooLarge { height: usize, width: usize },
}

/// A snapshot that cannot be restored into a consistent agent.
#[derive(Debug, Error)]
pub enum StateError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("cell {cell} lies outside the board")]
    OutOfBounds { cell: Cell },

    #[error("cell {cell} is classified as both safe and a mine")]
    ConflictingClassification { cell: Cell },

    #[error("cell {cell} was played but is not known safe")]
    PlayedNotSafe { cell: Cell },

    #[error("sentence {sentence} has a count outside [0, |cells|]")]
    InvalidSentence { sentence: String },

    #[error("snapshot encoding failed: {0}")]
    Encoding(#[from] bincode::Error),
}
