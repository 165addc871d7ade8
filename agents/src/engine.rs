use crate::difficulty::Difficulty;
use crate::error::EngineError;
use crate::minimax::MinimaxAgent;
use crate::random::RandomAgent;
use crate::Agent;
use checkers_core::{GameState, Move};

/// The engine behind each difficulty level.
pub enum Engine {
    Random(RandomAgent),
    Minimax(MinimaxAgent),
}

impl Engine {
    pub fn new(difficulty: Difficulty) -> Self {
        match difficulty.search_depth() {
            None => Engine::Random(RandomAgent::new()),
            Some(depth) => Engine::Minimax(MinimaxAgent::new(depth)),
        }
    }

    /// Same as [`Engine::new`] with reproducible random choices.
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        match difficulty.search_depth() {
            None => Engine::Random(RandomAgent::with_seed(seed)),
            Some(depth) => Engine::Minimax(MinimaxAgent::new(depth).seeded(seed)),
        }
    }
}

impl Agent for Engine {
    fn best_move(&mut self, state: &GameState) -> Result<Move, EngineError> {
        match self {
            Engine::Random(agent) => agent.best_move(state),
            Engine::Minimax(agent) => agent.best_move(state),
        }
    }

    fn name(&self) -> &str {
        match self {
            Engine::Random(agent) => agent.name(),
            Engine::Minimax(agent) => agent.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkers_core::Variant;

    #[test]
    fn test_engine_per_difficulty() {
        assert!(matches!(Engine::new(Difficulty::Novice), Engine::Random(_)));
        for difficulty in [Difficulty::Easy, Difficulty::Grandmaster] {
            match Engine::new(difficulty) {
                Engine::Minimax(agent) => {
                    assert_eq!(Some(agent.depth()), difficulty.search_depth())
                }
                Engine::Random(_) => panic!("{difficulty} should search"),
            }
        }
    }

    #[test]
    fn test_engines_play_each_other() {
        let mut white = Engine::with_seed(Difficulty::Easy, 1);
        let mut black = Engine::with_seed(Difficulty::Novice, 2);
        let mut state = GameState::new(Variant::Brazilian);

        for ply in 0..60 {
            if state.result().is_over() {
                break;
            }
            let engine = if ply % 2 == 0 { &mut white } else { &mut black };
            let mv = engine.best_move(&state).unwrap();
            assert!(state.is_legal(&mv));
            state.apply_move(&mv);
        }
    }
}
