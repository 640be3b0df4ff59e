//! Error taxonomy for the engine and its collaborators
//!
//! Game-rule endings (floor, ceiling, obstacle) are normal phases, not errors.
//! Everything here is either a refused transition or a collaborator fault.

use thiserror::Error;

use crate::sim::GamePhase;

#[derive(Debug, Error)]
pub enum GameError {
    /// Start requested before any difficulty was picked
    #[error("no difficulty selected")]
    NoDifficultySelected,

    #[error("unknown difficulty '{0}' (expected easy, medium, hard or extreme)")]
    UnknownDifficulty(String),

    /// A control event that the current phase does not accept
    #[error("cannot {action} while {phase:?}")]
    InvalidState {
        action: &'static str,
        phase: GamePhase,
    },

    /// Presentation surface missing or degenerate; the engine is not built
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
