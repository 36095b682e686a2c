//! Error types shared by the engine

use crate::lattice::Vertex;

/// Everything the engine can reject. All variants are recoverable.
#[derive(Debug, thiserror::Error)]
pub enum TriggleError {
    /// Bad side length, starting player or configuration value
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("unknown direction '{0}' (use D, DL or DR)")]
    InvalidDirection(String),

    /// A step of the move leaves the board (`step` 0 is the start peg)
    #[error("peg at step {step} ({vertex}) is out of bounds")]
    OutOfBounds { step: usize, vertex: Vertex },

    #[error("all three segments of this move are already placed")]
    AlreadyFullyPlaced,

    #[error("no legal move available")]
    NoLegalMove,

    #[error("config file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("config file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TriggleError>;
