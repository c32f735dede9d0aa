//! Knowledge base and inference.
//!
//! - `sentence`: constraints of the form "exactly N of these cells are mines"
//! - `agent`: the `KnowledgeAgent` owning the fact sets and sentences
//! - `inference`: the three-rule fixpoint run after every observation
//! - `snapshot`: capturing and restoring an agent

pub mod sentence;
pub mod agent;
pub mod inference;
pub mod snapshot;

pub use sentence::Sentence;
pub use agent::{KnowledgeAgent, Move};
pub use inference::InferenceReport;
pub use snapshot::AgentState;
