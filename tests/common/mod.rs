//! Test-only board driver.
//!
//! Holds a fixed mine layout, answers neighbor counts, and plays an agent
//! through a full game.

#![allow(dead_code)]

use minesweeper_ai::{Cell, KnowledgeAgent, Move};
use rustc_hash::FxHashSet;

/// Ground-truth mine layout.
#[derive(Clone, Debug)]
pub struct Board {
    pub height: usize,
    pub width: usize,
    mines: FxHashSet<Cell>,
}

impl Board {
    /// Build from rows of `.` (empty) and `*` (mine).
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        let mut mines = FxHashSet::default();

        for (row, line) in rows.iter().enumerate() {
            assert_eq!(line.len(), width, "ragged board row {row}");
            for (col, ch) in line.chars().enumerate() {
                if ch == '*' {
                    mines.insert(Cell::new(row, col));
                }
            }
        }

        Self { height, width, mines }
    }

    /// Build from a row-major mine mask.
    pub fn from_mask(height: usize, width: usize, mask: &[bool]) -> Self {
        let mines = mask
            .iter()
            .enumerate()
            .filter(|(_, m)| **m)
            .map(|(i, _)| Cell::from_index(i, width))
            .collect();
        Self { height, width, mines }
    }

    pub fn is_mine(&self, cell: Cell) -> bool {
        self.mines.contains(&cell)
    }

    pub fn mines(&self) -> &FxHashSet<Cell> {
        &self.mines
    }

    pub fn nearby_mines(&self, cell: Cell) -> u8 {
        cell.neighbors(self.height, self.width)
            .into_iter()
            .filter(|c| self.is_mine(*c))
            .count() as u8
    }

    pub fn cell_count(&self) -> usize {
        self.height * self.width
    }
}

/// How a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every safe cell was played.
    Won,
    /// A random guess hit a mine.
    Lost(Cell),
}

/// Statistics from one game.
#[derive(Clone, Debug, Default)]
pub struct GameLog {
    pub safe_moves: usize,
    pub random_moves: usize,
}

/// Play until won or a guess hits a mine, calling `check` after each
/// observation.
pub fn play_with<F>(agent: &mut KnowledgeAgent, board: &Board, mut check: F) -> (Outcome, GameLog)
where
    F: FnMut(&KnowledgeAgent, &Board),
{
    let mut log = GameLog::default();

    while let Some(mv) = agent.next_move() {
        let cell = mv.cell();
        match mv {
            Move::Safe(_) => {
                assert!(!board.is_mine(cell), "inferred-safe cell {cell} is a mine");
                log.safe_moves += 1;
            }
            Move::Random(_) => log.random_moves += 1,
        }

        if board.is_mine(cell) {
            return (Outcome::Lost(cell), log);
        }

        agent.record_observation(cell, board.nearby_mines(cell));
        check(agent, board);
    }

    (Outcome::Won, log)
}

pub fn play(agent: &mut KnowledgeAgent, board: &Board) -> (Outcome, GameLog) {
    play_with(agent, board, |_, _| {})
}

/// Every classification and every live sentence agrees with the board.
pub fn assert_sound(agent: &KnowledgeAgent, board: &Board) {
    assert!(agent.safes().is_disjoint(agent.mines()));

    for cell in agent.safes() {
        assert!(!board.is_mine(*cell), "{cell} marked safe but is a mine");
    }
    for cell in agent.mines() {
        assert!(board.is_mine(*cell), "{cell} marked mine but is safe");
    }
    for sentence in agent.knowledge() {
        assert!(sentence.is_consistent(), "inconsistent sentence {sentence}");
        let actual = sentence.cells().iter().filter(|c| board.is_mine(**c)).count();
        assert_eq!(actual as i32, sentence.count(), "false sentence {sentence}");
        for cell in sentence.cells() {
            assert!(!agent.safes().contains(cell) && !agent.mines().contains(cell));
        }
    }
}
