//! Capturing and restoring an agent.
//!
//! An [`AgentState`] holds everything needed to resume a game: the config,
//! the three fact sets, the live sentences, and the RNG position. Restoring
//! re-checks the invariants the engine relies on, since a snapshot may come
//! from outside the process.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::agent::KnowledgeAgent;
use super::sentence::Sentence;
use crate::core::{AgentConfig, AgentRng, AgentRngState, Cell, StateError};

/// Serializable agent state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentState {
    pub config: AgentConfig,
    pub moves_made: FxHashSet<Cell>,
    pub safes: FxHashSet<Cell>,
    pub mines: FxHashSet<Cell>,
    pub knowledge: Vec<Sentence>,
    pub rng: AgentRngState,
}

impl AgentState {
    /// Encode with `bincode`.
    pub fn to_bytes(&self) -> Result<Vec<u8>, StateError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from `bincode`. The result is not validated until passed to
    /// [`KnowledgeAgent::from_state`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StateError> {
        Ok(bincode::deserialize(bytes)?)
    }

    fn validate(&self) -> Result<(), StateError> {
        self.config.validate()?;
        let (height, width) = (self.config.height, self.config.width);

        let in_bounds = |cell: &Cell| -> Result<(), StateError> {
            if cell.is_within(height, width) {
                Ok(())
            } else {
                Err(StateError::OutOfBounds { cell: *cell })
            }
        };

        for cell in self.moves_made.iter().chain(&self.safes).chain(&self.mines) {
            in_bounds(cell)?;
        }
        if let Some(cell) = self.safes.intersection(&self.mines).next() {
            return Err(StateError::ConflictingClassification { cell: *cell });
        }
        if let Some(cell) = self.moves_made.iter().find(|c| !self.safes.contains(*c)) {
            return Err(StateError::PlayedNotSafe { cell: *cell });
        }

        for sentence in &self.knowledge {
            for cell in sentence.cells() {
                in_bounds(cell)?;
            }
        }

        Ok(())
    }
}

impl KnowledgeAgent {
    /// Capture the current state.
    #[must_use]
    pub fn state(&self) -> AgentState {
        AgentState {
            config: self.config.clone(),
            moves_made: self.moves_made.clone(),
            safes: self.safes.clone(),
            mines: self.mines.clone(),
            knowledge: self.knowledge.clone(),
            rng: self.rng.state(),
        }
    }

    /// Rebuild an agent from a captured state.
    ///
    /// Sentences are reduced against the restored fact sets and must still
    /// satisfy `0 <= count <= |cells|` afterwards. Inference then runs to a
    /// fixpoint, so a hand-edited snapshot cannot leave deductions pending.
    pub fn from_state(state: AgentState) -> Result<Self, StateError> {
        state.validate()?;

        let mut agent = KnowledgeAgent::with_config(state.config);
        agent.moves_made = state.moves_made;
        agent.safes = state.safes;
        agent.mines = state.mines;
        agent.rng = AgentRng::from_state(&state.rng);
        for sentence in state.knowledge {
            agent.push_sentence(sentence);
        }

        if let Some(sentence) = agent.knowledge.iter().find(|s| !s.is_consistent()) {
            return Err(StateError::InvalidSentence {
                sentence: sentence.to_string(),
            });
        }

        agent.run_fixpoint();
        Ok(agent)
    }
}
