//! # minesweeper-ai
//!
//! A knowledge-based inference engine that plays Minesweeper.
//!
//! ## Design Principles
//!
//! 1. **Sentences, not probabilities**: Knowledge is a list of constraints
//!    "exactly N of these cells are mines". Nothing is guessed until no
//!    constraint yields a certain answer.
//!
//! 2. **Monotonic facts**: Cells known safe, known to be mines, or already
//!    played are only ever added. A classification never changes.
//!
//! 3. **Fixpoint after every observation**: Each revealed count adds one
//!    sentence, then the inference rules run until none fires.
//!
//! ## Architecture
//!
//! - **Broadcast propagation**: Classifying a cell updates every live
//!   sentence, so sentences never mention resolved cells.
//!
//! - **Deterministic randomness**: The fallback move is drawn from a seeded
//!   ChaCha8 stream, so whole games are reproducible.
//!
//! ## Modules
//!
//! - `core`: Cells, configuration, RNG, errors
//! - `knowledge`: Sentences, the agent, the inference fixpoint, snapshots

pub mod core;
pub mod knowledge;

// Re-export commonly used types
pub use crate::core::{
    AgentConfig, AgentRng, AgentRngState, Cell,
    ConfigError, StateError,
};

pub use crate::knowledge::{
    AgentState, InferenceReport, KnowledgeAgent, Move, Sentence,
};
