//! Game engine: commands and queries over the board history.

use crate::invariants::{EngineInvariants, InvariantSet};
use crate::rules::{self, WinningLine};
use crate::{Board, EngineError, GameState, GameStatus, HistoryEntry, Mark, Position};
use tracing::{debug, instrument};

/// Tic-tac-toe engine with move history and time travel.
///
/// The engine is the only writer of its [`GameState`]. Callers issue
/// commands and read the state back through `&` accessors. Turn order,
/// winner and draw are derived from the state on every query.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates an engine at the opening position.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns a read-only view of the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the full history, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        self.state.history()
    }

    /// Returns the cursor into history.
    pub fn step_number(&self) -> usize {
        self.state.step_number()
    }

    /// Returns the move-list display order flag.
    pub fn is_ascending(&self) -> bool {
        self.state.is_ascending()
    }

    /// Returns true if X places the next mark.
    pub fn x_is_next(&self) -> bool {
        self.state.x_is_next()
    }

    /// Returns the mark the next placement will use.
    pub fn next_mark(&self) -> Mark {
        self.state.next_mark()
    }

    /// Returns the board under the cursor.
    pub fn current_board(&self) -> &Board {
        self.state.current_board()
    }

    /// Returns the winning line on the current board, if any.
    pub fn winner(&self) -> Option<WinningLine> {
        rules::winner(self.current_board())
    }

    /// Returns the derived status of the current position.
    ///
    /// A draw is reported once history holds one entry per cell plus the
    /// opening entry, whichever step the cursor is on.
    #[instrument(skip(self), fields(step = self.state.step_number()))]
    pub fn status(&self) -> GameStatus {
        if let Some(line) = self.winner() {
            GameStatus::Winner(line)
        } else if rules::history_is_full(self.history().len()) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(self.next_mark())
        }
    }

    /// Places the next mark at `pos`.
    ///
    /// Does nothing if the current board already has a winner or the cell
    /// is occupied. Otherwise any entries after the cursor are discarded
    /// before the new board is appended.
    #[instrument(skip(self), fields(position = %pos, step = self.state.step_number()))]
    pub fn place_mark(&mut self, pos: Position) {
        let board = *self.current_board();

        if let Some(line) = rules::winner(&board) {
            debug!(winner = %line.mark, "Game already won, ignoring move");
            return;
        }
        if !board.is_empty(pos) {
            debug!("Cell occupied, ignoring move");
            return;
        }

        let mark = self.next_mark();
        let discarded = self.history().len() - self.step_number() - 1;
        self.state.branch(HistoryEntry {
            board: board.with_mark(pos, mark),
            placed: Some(pos),
        });

        debug!(%mark, discarded, step = self.step_number(), "Mark placed");
        self.check_invariants();
    }

    /// Places the next mark at a raw cell index (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidCell`] if `index` is off the board.
    /// Illegal moves on valid cells are ignored as in [`place_mark`](Self::place_mark).
    #[instrument(skip(self))]
    pub fn place_mark_at(&mut self, index: usize) -> Result<(), EngineError> {
        let pos = Position::from_index(index).ok_or(EngineError::InvalidCell { index })?;
        self.place_mark(pos);
        Ok(())
    }

    /// Moves the cursor to `step` without touching history.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidIndex`] if `step` is past the end of
    /// history; the state is left unchanged.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), EngineError> {
        let len = self.history().len();
        if step >= len {
            debug!(len, "Jump target out of range");
            return Err(EngineError::InvalidIndex { step, len });
        }

        self.state.step_number = step;
        debug!(next = %self.next_mark(), "Cursor moved");
        self.check_invariants();
        Ok(())
    }

    /// Flips the move-list display order.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) {
        self.state.is_ascending = !self.state.is_ascending;
        debug!(ascending = self.state.is_ascending, "Order toggled");
    }

    /// Resets to the opening position.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.state = GameState::new();
        debug!("Game restarted");
    }

    /// History entries paired with their step, in display order.
    pub fn ordered_moves(&self) -> Vec<(usize, &HistoryEntry)> {
        let mut moves: Vec<_> = self.history().iter().enumerate().collect();
        if !self.is_ascending() {
            moves.reverse();
        }
        moves
    }

    fn check_invariants(&self) {
        if cfg!(debug_assertions) {
            let result = EngineInvariants::check_all(&self.state);
            debug_assert!(result.is_ok(), "Engine invariants violated: {:?}", result);
        }
    }
}
