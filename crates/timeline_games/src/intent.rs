//! Text commands typed at the prompt.

use derive_more::{Display, Error};
use std::str::FromStr;
use timeline_tictactoe::Position;
use tracing::instrument;

/// A user intent forwarded to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Place the next mark at a raw cell index.
    PlaceMark(usize),
    /// Move the history cursor.
    JumpTo(usize),
    /// Reverse the move list.
    ToggleOrder,
    /// Start over.
    Restart,
    /// Print the engine state as JSON.
    ShowState,
    /// Print the command summary.
    Help,
    /// Leave the session.
    Quit,
}

/// Command summary shown by `help`.
pub const HELP: &str = "\
Commands:
  <cell> | place <cell>   place a mark (0-8 or a label such as 'center')
  jump <step> | go <step> travel to a history step
  toggle                  reverse the move list
  restart                 start a new game
  state                   print the game state as JSON
  help                    show this message
  quit | exit             leave";

impl FromStr for Intent {
    type Err = CommandError;

    #[instrument]
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::new("Empty command".to_string()));
        };
        let arg = words.collect::<Vec<_>>().join(" ");

        let intent = match head.to_lowercase().as_str() {
            "place" | "p" => Intent::PlaceMark(parse_cell(&arg)?),
            "jump" | "go" | "j" => Intent::JumpTo(parse_number(&arg, "step")?),
            "toggle" | "t" => Intent::ToggleOrder,
            "restart" | "r" => Intent::Restart,
            "state" => Intent::ShowState,
            "help" | "h" | "?" => Intent::Help,
            "quit" | "exit" | "q" => Intent::Quit,
            _ => Intent::PlaceMark(parse_cell(line)?),
        };
        Ok(intent)
    }
}

fn parse_cell(arg: &str) -> Result<usize, CommandError> {
    if let Ok(index) = arg.trim().parse::<usize>() {
        return Ok(index);
    }
    Position::from_label_or_number(arg)
        .map(Position::to_index)
        .ok_or_else(|| CommandError::new(format!("Unknown command or cell: '{}'", arg.trim())))
}

fn parse_number(arg: &str, what: &str) -> Result<usize, CommandError> {
    arg.trim()
        .parse()
        .map_err(|_| CommandError::new(format!("Expected a {} number, got '{}'", what, arg.trim())))
}

/// Unparseable input at the prompt.
#[derive(Debug, Clone, Display, Error)]
#[display("Command error: {} at {}:{}", message, file, line)]
pub struct CommandError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl CommandError {
    /// Creates a new command error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
