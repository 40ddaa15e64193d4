//! Derived game status.

use crate::{Mark, WinningLine};
use serde::{Deserialize, Serialize};

/// Current status of the game, recomputed on every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// A line is complete on the current board.
    Winner(WinningLine),
    /// Every cell has been filled without a winner.
    Draw,
    /// Play continues with the given mark.
    InProgress(Mark),
}

impl GameStatus {
    /// Returns the winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Winner(line) => Some(line.mark),
            GameStatus::Draw | GameStatus::InProgress(_) => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Winner(line) => write!(f, "Winner: {}", line.mark),
            GameStatus::Draw => write!(f, "Draw"),
            GameStatus::InProgress(mark) => write!(f, "Next player: {}", mark),
        }
    }
}
