//! Empty origin invariant: history starts from a blank board.

use super::Invariant;
use crate::GameState;

/// Invariant: `history[0]` is the empty board with no move attached.
pub struct EmptyOriginInvariant;

impl Invariant<GameState> for EmptyOriginInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .first()
            .is_some_and(|entry| entry.board().is_blank() && entry.placed().is_none())
    }

    fn description() -> &'static str {
        "History starts from the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, HistoryEntry, Mark, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(EmptyOriginInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_marked_origin_violates() {
        let mut state = GameState::new();
        state.history[0] = HistoryEntry {
            board: Board::new().with_mark(Position::Center, Mark::X),
            placed: None,
        };
        assert!(!EmptyOriginInvariant::holds(&state));
    }

    #[test]
    fn test_origin_with_move_violates() {
        let mut state = GameState::new();
        state.history[0].placed = Some(Position::Center);
        assert!(!EmptyOriginInvariant::holds(&state));
    }
}
