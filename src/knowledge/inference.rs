//! Inference fixpoint over the knowledge base.
//!
//! After every observation the agent applies three rules until a full pass
//! changes nothing:
//!
//! 1. **Zero count**: `{a, b} = 0` means every cell is safe. The sentence
//!    is consumed.
//! 2. **Saturated count**: `{a, b} = 2` means every cell is a mine. The
//!    sentence is consumed.
//! 3. **Subset resolution**: with `S ⊆ T`, `T` becomes `T \ S` with count
//!    `T.count - S.count`. Neither sentence is removed; a later pass may
//!    consume the shrunk `T` under rule 1 or 2.
//!
//! Rules 1 and 2 each consume at most one sentence per pass. Rule 3 visits
//! every ordered pair once per pass. The closure does not depend on these
//! choices.
//!
//! Every pass that reports progress either removes a sentence or strictly
//! shrinks a cell set, so the loop runs at most
//! `sentences + mentioned cells + 1` passes.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::agent::KnowledgeAgent;
use super::sentence::Sentence;

/// What one fixpoint run did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceReport {
    /// Passes over the knowledge base, including the final idle one.
    pub passes: usize,
    /// Cells newly classified safe.
    pub safes_marked: usize,
    /// Cells newly classified as mines.
    pub mines_marked: usize,
    /// Sentences removed by rules 1 and 2.
    pub sentences_consumed: usize,
    /// Subset reductions that shrank a sentence.
    pub reductions: usize,
}

impl InferenceReport {
    /// Accumulate another run into this one.
    pub fn merge(&mut self, other: &InferenceReport) {
        self.passes += other.passes;
        self.safes_marked += other.safes_marked;
        self.mines_marked += other.mines_marked;
        self.sentences_consumed += other.sentences_consumed;
        self.reductions += other.reductions;
    }

    /// Whether any cell was classified.
    #[must_use]
    pub fn classified_any(&self) -> bool {
        self.safes_marked + self.mines_marked > 0
    }
}

impl KnowledgeAgent {
    /// Apply the inference rules until none fires.
    pub fn infer(&mut self) -> InferenceReport {
        self.run_fixpoint()
    }

    pub(crate) fn run_fixpoint(&mut self) -> InferenceReport {
        let mut report = InferenceReport::default();

        loop {
            report.passes += 1;

            let mut progress = self.apply_zero_count(&mut report);
            progress |= self.apply_saturated_count(&mut report);
            progress |= self.apply_subset_resolution(&mut report);

            if !progress {
                break;
            }
        }

        debug!(
            passes = report.passes,
            safes = report.safes_marked,
            mines = report.mines_marked,
            live = self.knowledge.len(),
            "inference reached fixpoint"
        );
        report
    }

    /// Rule 1: consume one sentence whose count is zero.
    fn apply_zero_count(&mut self, report: &mut InferenceReport) -> bool {
        let Some(index) = self.knowledge.iter().position(|s| s.count() == 0) else {
            return false;
        };

        // Removed before broadcasting so the scan never sees it half-applied.
        let sentence = self.knowledge.remove(index);
        debug!(%sentence, "zero count: cells are safe");

        for cell in sentence.known_safes() {
            if self.mark_safe(cell) {
                report.safes_marked += 1;
            }
        }
        report.sentences_consumed += 1;
        true
    }

    /// Rule 2: consume one sentence whose count equals its size.
    fn apply_saturated_count(&mut self, report: &mut InferenceReport) -> bool {
        let Some(index) = self
            .knowledge
            .iter()
            .position(|s| s.count() > 0 && s.count() as usize == s.len())
        else {
            return false;
        };

        let sentence = self.knowledge.remove(index);
        debug!(%sentence, "saturated count: cells are mines");

        for cell in sentence.known_mines() {
            if self.mark_mine(cell) {
                report.mines_marked += 1;
            }
        }
        report.sentences_consumed += 1;
        true
    }

    /// Rule 3: shrink every sentence that has another sentence as a subset.
    fn apply_subset_resolution(&mut self, report: &mut InferenceReport) -> bool {
        let mut progress = false;
        let len = self.knowledge.len();

        for i in 0..len {
            // The empty set is a subset of everything but carries no information.
            if self.knowledge[i].is_empty() {
                continue;
            }
            for j in 0..len {
                if i == j {
                    continue;
                }
                let (subset, target) = pair_mut(&mut self.knowledge, i, j);
                if subset.is_subset(target) && target.reduce_by(subset) {
                    debug!(%subset, %target, "subset resolution");
                    report.reductions += 1;
                    progress = true;
                }
            }
        }

        progress
    }
}

/// Borrow `knowledge[i]` shared and `knowledge[j]` exclusively. `i != j`.
fn pair_mut(knowledge: &mut [Sentence], i: usize, j: usize) -> (&Sentence, &mut Sentence) {
    if i < j {
        let (lo, hi) = knowledge.split_at_mut(j);
        (&lo[i], &mut hi[0])
    } else {
        let (lo, hi) = knowledge.split_at_mut(i);
        (&hi[0], &mut lo[j])
    }
}
