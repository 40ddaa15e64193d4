//! Interactive session: forwards intents to the engine and re-renders.

use crate::config::GameConfig;
use crate::intent::{HELP, Intent};
use crate::render::render;
use std::io::{BufRead, Write};
use timeline_tictactoe::{EngineError, GameEngine};
use tracing::{debug, info, instrument, warn};

/// Whether the prompt loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command.
    Continue,
    /// Stop reading.
    Quit,
}

/// A single game session driven by text commands.
#[derive(Debug, Clone, Default)]
pub struct Session {
    engine: GameEngine,
    config: GameConfig,
}

impl Session {
    /// Creates a session at the opening position.
    #[instrument(skip(config))]
    pub fn new(config: GameConfig) -> Self {
        Self {
            engine: GameEngine::new(),
            config,
        }
    }

    /// Returns the engine for read-only inspection.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Renders the current view.
    pub fn view(&self) -> String {
        render(&self.engine, &self.config)
    }

    /// Applies a single intent.
    ///
    /// # Errors
    ///
    /// Propagates [`EngineError`] for an out-of-range cell or history step.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, intent: Intent) -> Result<Flow, EngineError> {
        match intent {
            Intent::PlaceMark(cell) => self.engine.place_mark_at(cell)?,
            Intent::JumpTo(step) => self.engine.jump_to(step)?,
            Intent::ToggleOrder => self.engine.toggle_order(),
            Intent::Restart => self.engine.restart(),
            Intent::ShowState | Intent::Help => {}
            Intent::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Places marks at `cells` in order from the current position.
    ///
    /// # Errors
    ///
    /// Stops at the first cell off the board.
    #[instrument(skip(self))]
    pub fn replay(&mut self, cells: &[usize]) -> Result<(), EngineError> {
        for &cell in cells {
            self.engine.place_mark_at(cell)?;
        }
        info!(steps = self.engine.history().len() - 1, "Replay finished");
        Ok(())
    }

    /// Runs the prompt loop until `quit` or end of input.
    ///
    /// Bad commands and rejected jumps are reported and the loop continues.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> anyhow::Result<()> {
        info!("Session started");
        writeln!(out, "{}\n", self.view())?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let intent = match line.parse::<Intent>() {
                Ok(intent) => intent,
                Err(e) => {
                    debug!(error = %e, "Unparseable command");
                    writeln!(out, "{} (type 'help' for commands)", e.message)?;
                    continue;
                }
            };

            match self.dispatch(intent) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => {
                    warn!(error = %e, "Command rejected");
                    writeln!(out, "{}", e)?;
                    continue;
                }
            }

            match intent {
                Intent::Help => writeln!(out, "{}", HELP)?,
                Intent::ShowState => {
                    writeln!(out, "{}", serde_json::to_string_pretty(self.engine.state())?)?
                }
                _ => writeln!(out, "{}\n", self.view())?,
            }
        }

        info!("Session ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_quit() {
        let mut session = Session::default();
        assert_eq!(session.dispatch(Intent::Quit), Ok(Flow::Quit));
        assert_eq!(session.dispatch(Intent::PlaceMark(4)), Ok(Flow::Continue));
        assert_eq!(session.engine().history().len(), 2);
    }

    #[test]
    fn test_dispatch_propagates_engine_errors() {
        let mut session = Session::default();
        assert_eq!(
            session.dispatch(Intent::JumpTo(2)),
            Err(EngineError::InvalidIndex { step: 2, len: 1 })
        );
        assert_eq!(
            session.dispatch(Intent::PlaceMark(9)),
            Err(EngineError::InvalidCell { index: 9 })
        );
    }

    #[test]
    fn test_replay_stops_on_bad_cell() {
        let mut session = Session::default();
        assert!(session.replay(&[0, 1, 42, 2]).is_err());
        assert_eq!(session.engine().history().len(), 3);
    }
}
