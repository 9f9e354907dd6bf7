//! Error types for the game engine

use influence_domain::{PairError, PathError};
use thiserror::Error;

/// Completion text that could not be coerced into game data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The parsed names do not form a valid pair
    #[error("Invalid pair: {0}")]
    InvalidPair(#[from] PairError),

    /// Not enough chain entries could be recovered
    #[error("Too few chain entries: {0} (need at least 2)")]
    TooFewEntries(usize),

    /// The recovered entries do not form a valid path
    #[error("Invalid path: {0}")]
    InvalidPath(#[from] PathError),
}

/// Errors that can occur inside a pipeline
///
/// Never escapes the total pipeline entry points; each variant is logged and
/// answered with a fallback value.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The completion call failed (network, status, envelope)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The completion text could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

impl EngineError {
    /// Whether the failure happened before any text was received
    pub fn is_transport(&self) -> bool {
        matches!(self, EngineError::Transport(_))
    }
}
