//! Logical sentences about the board.
//!
//! A `Sentence` states that exactly `count` of its `cells` are mines.
//! Sentences start out over the unresolved neighbors of a revealed cell
//! and shrink as cells get classified:
//!
//! - `mark_mine` removes the cell and decrements the count
//! - `mark_safe` removes the cell and leaves the count alone
//! - `reduce_by` subtracts a subset sentence (subset resolution)
//!
//! ```
//! use minesweeper_ai::core::Cell;
//! use minesweeper_ai::knowledge::Sentence;
//!
//! let mut sentence = Sentence::new([Cell::new(0, 0), Cell::new(0, 1)], 1);
//! sentence.mark_safe(Cell::new(0, 0));
//!
//! assert_eq!(sentence.known_mines().len(), 1);
//! assert_eq!(sentence.to_string(), "{(0, 1)} = 1");
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::Cell;

/// "Exactly `count` of these cells are mines."
///
/// Equality is structural and order-independent: two sentences are equal
/// when their cell sets and counts match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    cells: FxHashSet<Cell>,
    /// Signed so inconsistent observations degrade instead of underflowing.
    count: i32,
}

impl Sentence {
    /// Create a sentence over its own copy of `cells`.
    ///
    /// No validation is done; a count outside `[0, |cells|]` is a caller
    /// contract violation.
    pub fn new(cells: impl IntoIterator<Item = Cell>, count: i32) -> Self {
        Self {
            cells: cells.into_iter().collect(),
            count,
        }
    }

    /// Cells still under consideration.
    #[must_use]
    pub fn cells(&self) -> &FxHashSet<Cell> {
        &self.cells
    }

    /// Number of mines among [`Sentence::cells`].
    #[must_use]
    pub fn count(&self) -> i32 {
        self.count
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// `0 <= count <= |cells|`.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.count >= 0 && self.count as usize <= self.cells.len()
    }

    /// Every cell, when the count says they all must be mines.
    #[must_use]
    pub fn known_mines(&self) -> FxHashSet<Cell> {
        if self.count > 0 && self.count as usize == self.cells.len() {
            self.cells.clone()
        } else {
            FxHashSet::default()
        }
    }

    /// Every cell, when the count says none of them can be a mine.
    #[must_use]
    pub fn known_safes(&self) -> FxHashSet<Cell> {
        if self.count == 0 {
            self.cells.clone()
        } else {
            FxHashSet::default()
        }
    }

    /// Record that `cell` is a mine. No-op if the cell is not mentioned.
    pub fn mark_mine(&mut self, cell: Cell) {
        if self.cells.remove(&cell) {
            self.count -= 1;
        }
    }

    /// Record that `cell` is safe. No-op if the cell is not mentioned.
    pub fn mark_safe(&mut self, cell: Cell) {
        self.cells.remove(&cell);
    }

    #[must_use]
    pub fn is_subset(&self, other: &Sentence) -> bool {
        self.cells.is_subset(&other.cells)
    }

    /// Subtract `subset` from this sentence: the mines not accounted for
    /// by `subset` must lie in the remaining cells.
    ///
    /// Caller guarantees `subset.cells ⊆ self.cells`. Returns whether the
    /// cell set shrank.
    pub fn reduce_by(&mut self, subset: &Sentence) -> bool {
        let before = self.cells.len();
        for cell in &subset.cells {
            self.cells.remove(cell);
        }
        self.count -= subset.count;
        self.cells.len() < before
    }
}

impl std::fmt::Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut cells: Vec<_> = self.cells.iter().collect();
        cells.sort();

        write!(f, "{{")?;
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{cell}")?;
        }
        write!(f, "}} = {}", self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(coords: &[(usize, usize)]) -> Vec<Cell> {
        coords.iter().copied().map(Cell::from).collect()
    }

    #[test]
    fn test_new_copies_cells() {
        let input = cells(&[(0, 0), (0, 1), (0, 0)]);
        let sentence = Sentence::new(input.clone(), 1);
        assert_eq!(sentence.len(), 2);
        assert_eq!(input.len(), 3);
    }

    #[test]
    fn test_mark_mine() {
        let mut sentence = Sentence::new(cells(&[(0, 0), (0, 1), (1, 1)]), 2);
        sentence.mark_mine(Cell::new(0, 1));
        assert_eq!(sentence.len(), 2);
        assert_eq!(sentence.count(), 1);
        assert!(!sentence.cells().contains(&Cell::new(0, 1)));
    }

    #[test]
    fn test_mark_mine_absent_cell_is_noop() {
        let mut sentence = Sentence::new(cells(&[(0, 0), (0, 1)]), 1);
        let before = sentence.clone();
        sentence.mark_mine(Cell::new(5, 5));
        assert_eq!(sentence, before);
    }

    #[test]
    fn test_mark_safe() {
        let mut sentence = Sentence::new(cells(&[(0, 0), (0, 1)]), 1);
        sentence.mark_safe(Cell::new(0, 0));
        assert_eq!(sentence.len(), 1);
        assert_eq!(sentence.count(), 1);

        let before = sentence.clone();
        sentence.mark_safe(Cell::new(0, 0));
        assert_eq!(sentence, before);
    }

    #[test]
    fn test_equality_is_order_independent() {
        let a = Sentence::new(cells(&[(0, 0), (0, 1), (2, 2)]), 1);
        let b = Sentence::new(cells(&[(2, 2), (0, 0), (0, 1)]), 1);
        let c = Sentence::new(cells(&[(2, 2), (0, 0), (0, 1)]), 2);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_known_safes_and_mines() {
        let zero = Sentence::new(cells(&[(0, 0), (0, 1)]), 0);
        assert_eq!(zero.known_safes().len(), 2);
        assert!(zero.known_mines().is_empty());

        let full = Sentence::new(cells(&[(1, 1), (1, 2)]), 2);
        assert_eq!(full.known_mines().len(), 2);
        assert!(full.known_safes().is_empty());

        let open = Sentence::new(cells(&[(1, 1), (1, 2)]), 1);
        assert!(open.known_mines().is_empty());
        assert!(open.known_safes().is_empty());

        let empty = Sentence::new([], 0);
        assert!(empty.known_mines().is_empty());
        assert!(empty.known_safes().is_empty());
    }

    #[test]
    fn test_reduce_by_subset() {
        let small = Sentence::new(cells(&[(0, 0), (0, 1)]), 1);
        let mut big = Sentence::new(cells(&[(0, 0), (0, 1), (0, 2)]), 1);

        assert!(small.is_subset(&big));
        assert!(!big.is_subset(&small));
        assert!(big.reduce_by(&small));
        assert_eq!(big, Sentence::new(cells(&[(0, 2)]), 0));
    }

    #[test]
    fn test_reduce_by_empty_does_not_shrink() {
        let empty = Sentence::new([], 0);
        let mut big = Sentence::new(cells(&[(0, 0)]), 1);
        assert!(!big.reduce_by(&empty));
        assert_eq!(big.count(), 1);
    }

    #[test]
    fn test_consistency() {
        assert!(Sentence::new(cells(&[(0, 0)]), 1).is_consistent());
        assert!(Sentence::new(cells(&[(0, 0)]), 0).is_consistent());
        assert!(!Sentence::new(cells(&[(0, 0)]), 2).is_consistent());
        assert!(!Sentence::new(cells(&[(0, 0)]), -1).is_consistent());
    }

    #[test]
    fn test_display() {
        let sentence = Sentence::new(cells(&[(1, 0), (0, 2)]), 1);
        assert_eq!(sentence.to_string(), "{(0, 2), (1, 0)} = 1");
        assert_eq!(Sentence::new([], 0).to_string(), "{} = 0");
    }

    #[test]
    fn test_serialization() {
        let sentence = Sentence::new(cells(&[(0, 0), (3, 4)]), 1);
        let json = serde_json::to_string(&sentence).unwrap();
        let deserialized: Sentence = serde_json::from_str(&json).unwrap();
        assert_eq!(sentence, deserialized);
    }
}
