//! Single step invariant: each entry adds one mark, alternating X and O.

use super::Invariant;
use crate::{GameState, Mark};

/// Invariant: consecutive entries differ by exactly one newly filled cell.
///
/// The cell is the entry's recorded `placed` position, it was empty on the
/// previous board, and marks alternate X, O, X, ... starting at entry 1.
pub struct SingleStepInvariant;

impl Invariant<GameState> for SingleStepInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .windows(2)
            .enumerate()
            .all(|(k, pair)| {
                let [prev, next] = pair else {
                    return false;
                };
                let Some(pos) = *next.placed() else {
                    return false;
                };
                let expected = if k % 2 == 0 { Mark::X } else { Mark::O };

                prev.board().is_empty(pos) && *next.board() == prev.board().with_mark(pos, expected)
            })
    }

    fn description() -> &'static str {
        "Each move fills one empty cell, alternating X and O"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameEngine, HistoryEntry, Position};

    #[test]
    fn test_engine_moves_hold() {
        let mut engine = GameEngine::new();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
        ] {
            engine.place_mark(pos);
        }
        assert!(SingleStepInvariant::holds(engine.state()));
    }

    #[test]
    fn test_same_mark_twice_violates() {
        let mut state = GameState::new();
        let first = state.history[0].board.with_mark(Position::TopLeft, Mark::X);
        state.history.push(HistoryEntry {
            board: first,
            placed: Some(Position::TopLeft),
        });
        state.history.push(HistoryEntry {
            board: first.with_mark(Position::Center, Mark::X),
            placed: Some(Position::Center),
        });
        assert!(!SingleStepInvariant::holds(&state));
    }

    #[test]
    fn test_wrong_recorded_cell_violates() {
        let mut state = GameState::new();
        state.history.push(HistoryEntry {
            board: state.history[0].board.with_mark(Position::TopLeft, Mark::X),
            placed: Some(Position::Center),
        });
        assert!(!SingleStepInvariant::holds(&state));
    }
}
