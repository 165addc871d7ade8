//! Engine errors.

use crate::difficulty::Difficulty;
use checkers_core::Color;
use thiserror::Error;

/// Errors an engine can report to its caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The side to move has no legal move; check the game result first.
    #[error("no legal move available for {0}")]
    NoLegalMoves(Color),

    /// The difficulty does not map to a search depth.
    #[error("{0} has no search depth; it is played by the random engine")]
    UnsupportedDifficulty(Difficulty),
}

/// Unknown difficulty name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown difficulty: {0:?} (expected novice, easy, medium, hard or grandmaster)")]
pub struct DifficultyParseError(pub String);
