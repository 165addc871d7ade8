use checkers_agents::{Agent, Evaluator, Heuristic, MinimaxAgent, RandomAgent};
use checkers_core::{Board, BoardSize, Color, GameState, Piece, Square, Variant};
use std::cell::Cell;
use std::collections::HashMap;

/// Delegates to the heuristic and counts the calls.
#[derive(Default)]
struct CountingEvaluator {
    calls: Cell<usize>,
}

impl Evaluator for CountingEvaluator {
    fn evaluate(&self, board: &Board) -> f32 {
        self.calls.set(self.calls.get() + 1);
        Heuristic.evaluate(board)
    }
}

fn position(pieces: &[((u8, u8), Piece)], turn: Color) -> GameState {
    let mut board = Board::empty(BoardSize::Eight);
    for &((row, col), piece) in pieces {
        board.set_piece(Square::new(row, col), piece);
    }
    GameState::from_position(Variant::Russian, board, turn).unwrap()
}

#[test]
fn forced_move_skips_evaluation() {
    let state = position(
        &[((4, 3), Piece::WhiteRegular), ((3, 2), Piece::BlackRegular)],
        Color::White,
    );
    let mut agent = MinimaxAgent::with_evaluator(2, CountingEvaluator::default());

    let mv = agent.best_move(&state).unwrap();
    assert_eq!(mv.to_string(), "4,3x2,1");
    assert_eq!(agent.evaluator().calls.get(), 0);
}

#[test]
fn open_position_is_evaluated() {
    let state = GameState::new(Variant::Russian);
    let mut agent = MinimaxAgent::with_evaluator(2, CountingEvaluator::default()).seeded(4);

    let mv = agent.best_move(&state).unwrap();
    assert!(state.is_legal(&mv));
    assert!(agent.evaluator().calls.get() > 0);
}

#[test]
fn random_agent_samples_piece_then_move() {
    // (5,0) has one move, (5,4) has two.
    let state = position(
        &[
            ((5, 0), Piece::WhiteRegular),
            ((5, 4), Piece::WhiteRegular),
            ((0, 7), Piece::BlackRegular),
        ],
        Color::White,
    );
    assert_eq!(state.legal_move_count(), 3);

    let mut agent = RandomAgent::with_seed(2024);
    let mut counts: HashMap<String, usize> = HashMap::new();
    for _ in 0..1000 {
        let mv = agent.best_move(&state).unwrap();
        *counts.entry(mv.to_string()).or_default() += 1;
    }

    assert_eq!(counts.len(), 3);
    let lone = counts["5,0-4,1"];
    assert!((400..=600).contains(&lone), "lone move drawn {lone} times");
    assert!(counts["5,4-4,3"] > 150);
    assert!(counts["5,4-4,5"] > 150);
}
