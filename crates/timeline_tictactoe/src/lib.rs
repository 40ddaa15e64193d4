//! Tic-tac-toe engine with move history and time travel.
//!
//! [`GameEngine`] owns every board reached so far and a cursor into that
//! history. Jumping back never discards anything; placing a mark from an
//! earlier step starts a new branch and drops the abandoned future.
//!
//! # Example
//!
//! ```
//! use timeline_tictactoe::{GameEngine, GameStatus, Mark, Position};
//!
//! let mut engine = GameEngine::new();
//! for pos in [Position::TopLeft, Position::Center, Position::TopCenter] {
//!     engine.place_mark(pos);
//! }
//! assert_eq!(engine.status(), GameStatus::InProgress(Mark::O));
//!
//! engine.jump_to(1).unwrap();
//! assert_eq!(engine.history().len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod status;
mod types;

pub use engine::GameEngine;
pub use error::EngineError;
pub use history::{GameState, HistoryEntry};
pub use position::Position;
pub use rules::WinningLine;
pub use status::GameStatus;
pub use types::{Board, Cell, Mark};
