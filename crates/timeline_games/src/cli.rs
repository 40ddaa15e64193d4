//! Command-line interface for timeline_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use timeline_games::EmptyCellStyle;

/// Timeline Tic-Tac-Toe - play, rewind, and branch
#[derive(Parser, Debug)]
#[command(name = "timeline_games")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it doesn't exist)
    #[arg(short, long, default_value = "timeline.toml", global = true)]
    pub config: PathBuf,

    /// Override how empty cells are drawn
    #[arg(long, value_enum, global = true)]
    pub empty_cell: Option<EmptyCellStyle>,

    /// Don't bracket the winning line
    #[arg(long, global = true)]
    pub no_highlight: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play,

    /// Place the given cells in order, print the result, and exit
    Replay {
        /// Cell indices (0-8), X first
        cells: Vec<usize>,
    },
}
