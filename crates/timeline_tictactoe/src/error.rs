//! Engine error types.

/// Contract violations reported by [`GameEngine`](crate::GameEngine).
///
/// Illegal moves (occupied cell, game already won) are not errors; the
/// engine ignores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EngineError {
    /// Jump target is past the end of history.
    #[display("History index {step} out of range (history has {len} entries)")]
    InvalidIndex {
        /// Requested step.
        step: usize,
        /// Number of history entries at the time of the request.
        len: usize,
    },

    /// Raw cell index outside the board.
    #[display("Cell index {index} out of range (must be 0-8)")]
    InvalidCell {
        /// Requested cell index.
        index: usize,
    },
}
