pub mod difficulty;
pub mod engine;
pub mod error;
pub mod evaluation;
pub mod minimax;
pub mod random;
pub mod search;

use checkers_core::{GameState, Move};

/// Core trait for checkers engines
pub trait Agent {
    /// Picks a legal move for the side to move
    fn best_move(&mut self, state: &GameState) -> Result<Move, EngineError>;

    /// Get the agent's name
    fn name(&self) -> &str;
}

pub use difficulty::Difficulty;
pub use engine::Engine;
pub use error::*;
pub use evaluation::*;
pub use minimax::MinimaxAgent;
pub use random::RandomAgent;
pub use search::*;
