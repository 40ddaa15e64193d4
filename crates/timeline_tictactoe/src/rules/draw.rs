//! Draw detection logic for tic-tac-toe.

use crate::Board;
use tracing::instrument;

/// History length at which every cell has been filled.
///
/// The initial empty board occupies the first entry and each move fills
/// exactly one cell.
pub const FULL_HISTORY_LEN: usize = Board::CELLS + 1;

/// Checks whether a history of `len` entries has filled the board.
#[instrument]
pub fn history_is_full(len: usize) -> bool {
    len == FULL_HISTORY_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_length_threshold() {
        assert!(!history_is_full(9));
        assert!(history_is_full(10));
    }
}
