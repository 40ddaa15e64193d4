//! Board history and the cursor into it.

use crate::{Board, Mark, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A board snapshot plus the cell filled to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Board after the move.
    pub(crate) board: Board,
    /// Cell filled by the move; `None` for the opening entry.
    pub(crate) placed: Option<Position>,
}

impl HistoryEntry {
    /// The opening entry: an empty board with no move.
    pub fn opening() -> Self {
        Self {
            board: Board::new(),
            placed: None,
        }
    }
}

/// Complete game state: every board reached so far and which one is current.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Chronological history; index 0 is always the empty board.
    pub(crate) history: Vec<HistoryEntry>,
    /// Index of the current entry.
    pub(crate) step_number: usize,
    /// Move-list display order. Has no effect on play.
    pub(crate) is_ascending: bool,
}

impl GameState {
    /// Creates the opening state.
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::opening()],
            step_number: 0,
            is_ascending: true,
        }
    }

    /// Returns the full history.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Returns the cursor.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// Returns true when the move list should be shown oldest-first.
    pub fn is_ascending(&self) -> bool {
        self.is_ascending
    }

    /// X moves whenever the cursor sits on an even step.
    pub fn x_is_next(&self) -> bool {
        self.step_number % 2 == 0
    }

    /// Mark that the next placement will use.
    pub fn next_mark(&self) -> Mark {
        if self.x_is_next() { Mark::X } else { Mark::O }
    }

    /// Returns the entry under the cursor.
    pub fn current_entry(&self) -> &HistoryEntry {
        &self.history[self.step_number]
    }

    /// Returns the board under the cursor.
    pub fn current_board(&self) -> &Board {
        &self.current_entry().board
    }

    /// Drops entries past the cursor, appends `entry`, and moves the cursor onto it.
    pub(crate) fn branch(&mut self, entry: HistoryEntry) {
        self.history.truncate(self.step_number + 1);
        self.history.push(entry);
        self.step_number = self.history.len() - 1;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
