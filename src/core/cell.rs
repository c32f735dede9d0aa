//! Board cell coordinates.
//!
//! A `Cell` is a `(row, col)` pair. The engine only needs equality and
//! hashing for set membership; ordering exists so diagnostics print
//! sentences in a stable order.
//!
//! ## Usage
//!
//! ```
//! use minesweeper_ai::core::Cell;
//!
//! let corner = Cell::new(0, 0);
//! let neighbors = corner.neighbors(3, 3);
//!
//! assert_eq!(neighbors.len(), 3);
//! assert!(neighbors.contains(&Cell::new(1, 1)));
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Create a new cell.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index of this cell on a board `width` columns wide.
    #[must_use]
    pub const fn index(self, width: usize) -> usize {
        self.row * width + self.col
    }

    /// Inverse of [`Cell::index`].
    ///
    /// ```
    /// use minesweeper_ai::core::Cell;
    ///
    /// let cell = Cell::from_index(7, 3);
    /// assert_eq!(cell, Cell::new(2, 1));
    /// assert_eq!(cell.index(3), 7);
    /// ```
    #[must_use]
    pub const fn from_index(index: usize, width: usize) -> Self {
        Self {
            row: index / width,
            col: index % width,
        }
    }

    /// Check if this cell lies on a `height` x `width` board.
    #[must_use]
    pub const fn is_within(self, height: usize, width: usize) -> bool {
        self.row < height && self.col < width
    }

    /// All in-bounds cells adjacent to this one, diagonals included.
    ///
    /// The cell itself is never returned. Cells outside
    /// `[0, height) x [0, width)` are dropped, so a corner has 3
    /// neighbors, an edge 5, and an interior cell 8.
    #[must_use]
    pub fn neighbors(self, height: usize, width: usize) -> SmallVec<[Cell; 8]> {
        let mut out = SmallVec::new();
        if height == 0 || width == 0 {
            return out;
        }

        let row_lo = self.row.saturating_sub(1);
        let col_lo = self.col.saturating_sub(1);
        let row_hi = (self.row + 1).min(height - 1);
        let col_hi = (self.col + 1).min(width - 1);

        for row in row_lo..=row_hi {
            for col in col_lo..=col_hi {
                let cell = Cell::new(row, col);
                if cell != self {
                    out.push(cell);
                }
            }
        }

        out
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
