use crate::difficulty::Difficulty;
use crate::error::EngineError;
use crate::evaluation::{Evaluator, Heuristic};
use crate::search::{search, SearchResult};
use crate::Agent;
use checkers_core::{GameState, Move};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Fixed-depth alpha-beta agent.
pub struct MinimaxAgent<E = Heuristic> {
    name: String,
    depth: u8,
    evaluator: E,
    rng: StdRng,
}

impl MinimaxAgent {
    pub fn new(depth: u8) -> Self {
        Self::with_evaluator(depth, Heuristic)
    }

    /// Builds the agent for a difficulty level.
    /// Novice has no search depth and is rejected.
    pub fn from_difficulty(difficulty: Difficulty) -> Result<Self, EngineError> {
        difficulty
            .search_depth()
            .map(Self::new)
            .ok_or(EngineError::UnsupportedDifficulty(difficulty))
    }
}

impl<E: Evaluator> MinimaxAgent<E> {
    pub fn with_evaluator(depth: u8, evaluator: E) -> Self {
        MinimaxAgent {
            name: format!("Minimax(depth={})", depth),
            depth,
            evaluator,
            rng: StdRng::from_entropy(),
        }
    }

    /// Reseeds the tie-break jitter.
    pub fn seeded(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Searches `state` and reports the score and node count with the move.
    pub fn search(&mut self, state: &GameState) -> Result<SearchResult, EngineError> {
        search(state, self.depth, &self.evaluator, &mut self.rng)
    }
}

impl<E: Evaluator> Agent for MinimaxAgent<E> {
    fn best_move(&mut self, state: &GameState) -> Result<Move, EngineError> {
        self.search(state).map(|result| result.best_move)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
