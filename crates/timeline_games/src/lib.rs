//! Terminal driver for the timeline tic-tac-toe engine.
//!
//! The driver owns no game rules. It parses text commands into
//! [`Intent`]s, forwards them to [`timeline_tictactoe::GameEngine`], and
//! re-renders the engine's read-only state after each one.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod intent;
mod render;
mod session;

pub use config::{ConfigError, EmptyCellStyle, GameConfig};
pub use intent::{CommandError, HELP, Intent};
pub use render::{move_description, order_label, render, render_board, render_moves};
pub use session::{Flow, Session};
