//! Cursor invariant: the step number always names an existing entry.

use super::Invariant;
use crate::GameState;

/// Invariant: `0 <= step_number < history.len()`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameState> for CursorInBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        state.step_number() < state.history().len()
    }

    fn description() -> &'static str {
        "Cursor points at an existing history entry"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        assert!(CursorInBoundsInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_cursor_past_end_violates() {
        let mut state = GameState::new();
        state.step_number = 1;
        assert!(!CursorInBoundsInvariant::holds(&state));
    }
}
