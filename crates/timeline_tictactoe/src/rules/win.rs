//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Winning lines, checked in this order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Three equal marks in a row, column, or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    /// The mark that completed the line.
    pub mark: Mark,
    /// The three cells making up the line.
    pub cells: [Position; 3],
}

impl WinningLine {
    /// Returns true if `pos` is one of the winning cells.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

/// Returns the first line in [`LINES`] held entirely by one mark.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = board.get(a).mark()?;
        (board.get(b) == board.get(a) && board.get(c) == board.get(a)).then_some(WinningLine {
            mark,
            cells: [a, b, c],
        })
    })
}
