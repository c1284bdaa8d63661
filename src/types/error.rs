//! Error types for the kiwirail library.

use thiserror::Error;

use super::Town;

/// All errors that can occur while building a graph or loading input.
///
/// A missing route is not an error; see [`RouteDistance`](super::RouteDistance).
#[derive(Error, Debug)]
pub enum RailError {
    /// An edge starts and ends at the same town.
    #[error("Self-loop not allowed on town {0}")]
    SelfLoop(Town),

    /// The same ordered pair of towns appears twice.
    #[error("Duplicate route from {from} to {to}")]
    DuplicateEdge { from: Town, to: Town },

    /// Edge weight is zero or negative.
    #[error("Invalid weight {weight} on route from {from} to {to}: must be a positive 32-bit integer")]
    InvalidWeight { from: Town, to: Town, weight: i64 },

    /// A town label is empty.
    #[error("Town label must not be empty")]
    EmptyTownLabel,

    /// Malformed textual input.
    #[error("Parse error at token {position} ({token:?}): {reason}")]
    Parse {
        position: usize,
        token: String,
        reason: String,
    },

    /// Configuration file could not be loaded.
    #[error("Config error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for kiwirail operations.
pub type RailResult<T> = Result<T, RailError>;
