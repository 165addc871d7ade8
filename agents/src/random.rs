use crate::error::EngineError;
use crate::Agent;
use checkers_core::{GameState, Move};
use rand::rngs::StdRng;
use rand::seq::{IteratorRandom, SliceRandom};
use rand::SeedableRng;

/// Plays a uniformly random piece, then a uniformly random move of that piece.
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            name: "Random".to_string(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates an agent whose choices are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            name: "Random".to_string(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn best_move(&mut self, state: &GameState) -> Result<Move, EngineError> {
        let no_moves = || EngineError::NoLegalMoves(state.current_color());
        let (_, moves) = state
            .legal_moves()
            .iter()
            .choose(&mut self.rng)
            .ok_or_else(no_moves)?;
        moves.choose(&mut self.rng).cloned().ok_or_else(no_moves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkers_core::{Board, BoardSize, Color, Piece, Square, Variant};

    #[test]
    fn test_plays_legal_moves() {
        let mut agent = RandomAgent::with_seed(11);
        let mut state = GameState::new(Variant::International);
        for _ in 0..40 {
            if state.result().is_over() {
                break;
            }
            let mv = agent.best_move(&state).unwrap();
            assert!(state.is_legal(&mv));
            state.apply_move(&mv);
        }
    }

    #[test]
    fn test_same_seed_same_moves() {
        let state = GameState::new(Variant::Russian);
        let mut a = RandomAgent::with_seed(42);
        let mut b = RandomAgent::with_seed(42);
        for _ in 0..10 {
            assert_eq!(a.best_move(&state), b.best_move(&state));
        }
    }

    #[test]
    fn test_no_legal_moves() {
        let mut board = Board::empty(BoardSize::Eight);
        board.set_piece(Square::new(0, 1), Piece::WhiteRegular);
        board.set_piece(Square::new(1, 0), Piece::BlackRegular);
        let state = GameState::from_position(Variant::Russian, board, Color::White).unwrap();

        let mut agent = RandomAgent::with_seed(0);
        assert_eq!(
            agent.best_move(&state),
            Err(EngineError::NoLegalMoves(Color::White))
        );
    }
}
