//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Mark placed by one of the two participants.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Mark {
    /// Mark X (always moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards stored in history are never mutated; [`Board::with_mark`]
/// returns a fresh copy instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; Board::CELLS],
}

impl Board {
    /// Number of cells on the board.
    pub const CELLS: usize = 9;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; Self::CELLS],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns a copy of this board with `mark` placed at `pos`.
    pub fn with_mark(&self, pos: Position, mark: Mark) -> Self {
        let mut next = *self;
        next.cells[pos.to_index()] = Cell::Occupied(mark);
        next
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; Board::CELLS] {
        &self.cells
    }

    /// Counts the cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(mark))
            .count()
    }

    /// Counts the occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Returns true when no cell holds a mark.
    pub fn is_blank(&self) -> bool {
        self.occupied() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(Position::Center, Mark::X);

        assert!(board.is_blank());
        assert_eq!(next.get(Position::Center), Cell::Occupied(Mark::X));
        assert_eq!(next.occupied(), 1);
    }

    #[test]
    fn counts_each_mark() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Mark::X)
            .with_mark(Position::Center, Mark::O)
            .with_mark(Position::BottomRight, Mark::X);

        assert_eq!(board.count(Mark::X), 2);
        assert_eq!(board.count(Mark::O), 1);
    }

    #[test]
    fn opponent_flips() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }
}
