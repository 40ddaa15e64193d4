//! Game rules for tic-tac-toe.

pub mod draw;
pub mod win;

pub use draw::{FULL_HISTORY_LEN, history_is_full};
pub use win::{LINES, WinningLine, winner};
