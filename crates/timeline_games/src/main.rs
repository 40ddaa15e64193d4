//! Timeline Games - unified CLI.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use timeline_games::{GameConfig, Session};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    initialize_tracing(config.log_filter());

    match cli.command {
        Command::Play => run_play(config),
        Command::Replay { cells } => run_replay(config, &cells),
    }
}

/// Loads the config file and applies command-line overrides.
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = GameConfig::load_or_default(&cli.config)?;
    if let Some(style) = cli.empty_cell {
        config = config.with_empty_cell(style);
    }
    if cli.no_highlight {
        config = config.with_highlight_winner(false);
    }
    Ok(config)
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Runs the interactive session
#[instrument(skip(config))]
fn run_play(config: GameConfig) -> Result<()> {
    info!("Starting interactive game");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Session::new(config).run(stdin.lock(), stdout.lock())
}

/// Replays a fixed sequence of cells
#[instrument(skip(config))]
fn run_replay(config: GameConfig, cells: &[usize]) -> Result<()> {
    let mut session = Session::new(config);
    session.replay(cells)?;
    println!("{}", session.view());
    Ok(())
}
