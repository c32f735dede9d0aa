//! The knowledge agent: fact sets, sentence bookkeeping, and move selection.
//!
//! ## State
//!
//! - `moves_made`: cells already played
//! - `safes`: cells known to hold no mine
//! - `mines`: cells known to hold a mine
//! - `knowledge`: live sentences not yet fully resolved
//!
//! The three fact sets only ever grow. Classifying a cell broadcasts the
//! fact into every live sentence, so no sentence keeps mentioning a cell
//! whose status is already known.
//!
//! ## Driver Contract
//!
//! The game driver calls [`KnowledgeAgent::record_observation`] once per
//! revealed cell with the number of neighboring mines, then asks
//! [`KnowledgeAgent::safe_candidate`] or
//! [`KnowledgeAgent::random_candidate`] for the next cell to reveal.
//! Observations must be consistent with the board; contradictions are not
//! detected.
//!
//! ```
//! use minesweeper_ai::core::Cell;
//! use minesweeper_ai::knowledge::KnowledgeAgent;
//!
//! let mut agent = KnowledgeAgent::new(3, 3);
//! agent.record_observation(Cell::new(1, 1), 0);
//!
//! assert_eq!(agent.safes().len(), 9);
//! assert!(agent.knowledge().is_empty());
//! assert!(agent.safe_candidate().is_some());
//! ```

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::trace;

use super::inference::InferenceReport;
use super::sentence::Sentence;
use crate::core::{AgentConfig, AgentRng, Cell, ConfigError};

/// A move proposed by [`KnowledgeAgent::next_move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    /// Cell proven safe by inference.
    Safe(Cell),
    /// Uniform guess among unplayed cells not known to be mines.
    Random(Cell),
}

impl Move {
    /// The cell to reveal.
    #[must_use]
    pub fn cell(self) -> Cell {
        match self {
            Move::Safe(cell) | Move::Random(cell) => cell,
        }
    }

    #[must_use]
    pub fn is_safe(self) -> bool {
        matches!(self, Move::Safe(_))
    }
}

/// Minesweeper player backed by a knowledge base of [`Sentence`]s.
///
/// One agent plays one game. It is an owned value with no shared state;
/// the driver holds it and passes it by reference.
#[derive(Clone, Debug)]
pub struct KnowledgeAgent {
    pub(crate) config: AgentConfig,
    pub(crate) moves_made: FxHashSet<Cell>,
    pub(crate) safes: FxHashSet<Cell>,
    pub(crate) mines: FxHashSet<Cell>,
    pub(crate) knowledge: Vec<Sentence>,
    pub(crate) rng: AgentRng,
}

impl KnowledgeAgent {
    /// Create an agent for a `height` x `width` board with the default seed.
    #[must_use]
    pub fn new(height: usize, width: usize) -> Self {
        Self::with_config(AgentConfig::new(height, width))
    }

    /// Create an agent from a validated config.
    pub fn from_config(config: AgentConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    pub(crate) fn with_config(config: AgentConfig) -> Self {
        Self {
            rng: AgentRng::new(config.seed),
            config,
            moves_made: FxHashSet::default(),
            safes: FxHashSet::default(),
            mines: FxHashSet::default(),
            knowledge: Vec::new(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.config.height
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.config.width
    }

    /// Cells already played.
    #[must_use]
    pub fn moves_made(&self) -> &FxHashSet<Cell> {
        &self.moves_made
    }

    /// Cells known to be safe.
    #[must_use]
    pub fn safes(&self) -> &FxHashSet<Cell> {
        &self.safes
    }

    /// Cells known to be mines.
    #[must_use]
    pub fn mines(&self) -> &FxHashSet<Cell> {
        &self.mines
    }

    /// Live sentences, in insertion order.
    #[must_use]
    pub fn knowledge(&self) -> &[Sentence] {
        &self.knowledge
    }

    /// Cells neither played nor known to be mines.
    #[must_use]
    pub fn unresolved_count(&self) -> usize {
        self.config
            .height
            .saturating_mul(self.config.width)
            .saturating_sub(self.moves_made.len() + self.mines.len())
    }

    /// Every cell is either played or a known mine.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.unresolved_count() == 0
    }

    // === Fact Propagation ===

    /// Classify `cell` as a mine everywhere.
    ///
    /// Returns `true` if the cell was not already a known mine.
    pub fn mark_mine(&mut self, cell: Cell) -> bool {
        let added = self.mines.insert(cell);
        for sentence in &mut self.knowledge {
            sentence.mark_mine(cell);
        }
        added
    }

    /// Classify `cell` as safe everywhere.
    ///
    /// Returns `true` if the cell was not already known safe.
    pub fn mark_safe(&mut self, cell: Cell) -> bool {
        let added = self.safes.insert(cell);
        for sentence in &mut self.knowledge {
            sentence.mark_safe(cell);
        }
        added
    }

    /// In-bounds cells adjacent to `cell`.
    #[must_use]
    pub fn neighbors(&self, cell: Cell) -> SmallVec<[Cell; 8]> {
        cell.neighbors(self.config.height, self.config.width)
    }

    // === Observations ===

    /// Record that `cell` was revealed with `count` neighboring mines.
    ///
    /// Marks the cell played and safe, adds a sentence over its neighbors
    /// reduced against everything already known, then runs inference to a
    /// fixpoint.
    pub fn record_observation(&mut self, cell: Cell, count: u8) -> InferenceReport {
        self.moves_made.insert(cell);
        self.mark_safe(cell);

        let sentence = Sentence::new(self.neighbors(cell), i32::from(count));
        self.push_sentence(sentence);

        self.run_fixpoint()
    }

    /// Add an externally built sentence and run inference to a fixpoint.
    pub fn add_sentence(&mut self, sentence: Sentence) -> InferenceReport {
        self.push_sentence(sentence);
        self.run_fixpoint()
    }

    /// Reduce `sentence` against the known fact sets and append it.
    pub(crate) fn push_sentence(&mut self, mut sentence: Sentence) {
        let known: SmallVec<[Cell; 8]> = sentence
            .cells()
            .iter()
            .copied()
            .filter(|c| self.safes.contains(c) || self.mines.contains(c))
            .collect();

        for cell in known {
            if self.safes.contains(&cell) {
                sentence.mark_safe(cell);
            } else {
                sentence.mark_mine(cell);
            }
        }

        trace!(%sentence, "appending sentence");
        self.knowledge.push(sentence);
    }

    // === Move Selection ===

    /// A known-safe cell that has not been played yet.
    ///
    /// Which one is returned when several qualify is unspecified.
    #[must_use]
    pub fn safe_candidate(&self) -> Option<Cell> {
        self.safes
            .iter()
            .find(|cell| !self.moves_made.contains(*cell))
            .copied()
    }

    /// A uniformly random cell that is neither played nor a known mine.
    ///
    /// Returns `None` once the board is fully resolved. The draw is over the
    /// current candidate set, never retry-until-valid, and is reproducible
    /// for a given seed.
    pub fn random_candidate(&mut self) -> Option<Cell> {
        if self.is_resolved() {
            return None;
        }

        let (height, width) = (self.config.height, self.config.width);
        let candidates: Vec<Cell> = (0..height)
            .flat_map(|row| (0..width).map(move |col| Cell::new(row, col)))
            .filter(|c| !self.moves_made.contains(c) && !self.mines.contains(c))
            .collect();

        self.rng.choose(&candidates).copied()
    }

    /// Safe move if one is known, otherwise a random one.
    pub fn next_move(&mut self) -> Option<Move> {
        if let Some(cell) = self.safe_candidate() {
            return Some(Move::Safe(cell));
        }
        self.random_candidate().map(Move::Random)
    }
}
