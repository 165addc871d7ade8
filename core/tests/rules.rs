//! Rule scenarios on hand-built positions.

use checkers_core::{
    Board, BoardSize, Color, GameState, Move, MovePath, Outcome, Piece, Square, Variant,
};

fn position(variant: Variant, turn: Color, pieces: &[((u8, u8), Piece)]) -> GameState {
    let mut board = Board::empty(variant.board_size());
    for &((row, col), piece) in pieces {
        board.set_piece(Square::new(row, col), piece);
    }
    GameState::from_position(variant, board, turn).unwrap()
}

#[test]
fn opening_step_passes_the_turn() {
    let mut state = GameState::new(Variant::Russian);
    assert_eq!(state.current_color(), Color::White);

    let mv = Move::simple(Square::new(5, 0), Square::new(4, 1));
    assert!(state.legal_moves_from(Square::new(5, 0)).contains(&mv));

    state.apply_move(&mv);
    assert_eq!(state.current_color(), Color::Black);
    assert_eq!(state.board().count(Color::White), 12);
    assert_eq!(state.board().count(Color::Black), 12);
}

#[test]
fn single_capture_is_forced() {
    let state = position(
        Variant::Russian,
        Color::White,
        &[((4, 3), Piece::WhiteRegular), ((3, 2), Piece::BlackRegular)],
    );

    let expected = Move::jump(Square::new(4, 3), Square::new(2, 1), Square::new(3, 2));
    assert_eq!(state.legal_moves_from(Square::new(4, 3)), &[expected.clone()]);
    assert_eq!(state.legal_move_count(), 1);
    assert_eq!(state.iter_legal_moves().next(), Some(&expected));
}

#[test]
fn jump_toward_the_edge_stays_terminal() {
    let state = position(
        Variant::Russian,
        Color::White,
        &[
            ((4, 3), Piece::WhiteRegular),
            ((3, 2), Piece::BlackRegular),
            ((1, 0), Piece::BlackRegular),
        ],
    );

    let moves = state.legal_moves_from(Square::new(4, 3));
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].len(), 1);
    assert_eq!(moves[0].to(), Square::new(2, 1));
    assert_eq!(state.legal_move_count(), 1);
}

#[test]
fn promotion_on_final_step() {
    let mut state = position(
        Variant::Brazilian,
        Color::White,
        &[((1, 2), Piece::WhiteRegular), ((6, 1), Piece::BlackRegular)],
    );
    state.apply_move(&Move::simple(Square::new(1, 2), Square::new(0, 1)));
    assert_eq!(state.board().piece_at(Square::new(0, 1)), Piece::WhiteQueen);
}

#[test]
fn black_promotes_on_the_last_row() {
    let mut state = position(
        Variant::International,
        Color::Black,
        &[((8, 1), Piece::BlackRegular), ((0, 1), Piece::WhiteRegular)],
    );
    state.apply_move(&Move::simple(Square::new(8, 1), Square::new(9, 0)));
    assert_eq!(state.board().piece_at(Square::new(9, 0)), Piece::BlackQueen);
}

#[test]
fn passing_the_last_row_mid_chain() {
    let pieces = [
        ((2, 1), Piece::WhiteRegular),
        ((1, 2), Piece::BlackRegular),
        ((1, 4), Piece::BlackRegular),
    ];

    // Brazilian: the piece touches row 0 but ends on row 2 and stays regular.
    let mut brazilian = position(Variant::Brazilian, Color::White, &pieces);
    let moves: Vec<Move> = brazilian.iter_legal_moves().cloned().collect();
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].to_string(), "2,1x0,3x2,5");
    brazilian.apply_move(&moves[0]);
    assert_eq!(brazilian.board().piece_at(Square::new(2, 5)), Piece::WhiteRegular);

    // Russian: crowned on row 0, the queen may land anywhere past (1,4).
    let mut russian = position(Variant::Russian, Color::White, &pieces);
    let moves: Vec<Move> = russian.iter_legal_moves().cloned().collect();
    assert_eq!(moves.len(), 3);
    let mv = moves.iter().find(|mv| mv.to() == Square::new(4, 7)).unwrap().clone();
    russian.apply_move(&mv);
    assert_eq!(russian.board().piece_at(Square::new(4, 7)), Piece::WhiteQueen);
    assert_eq!(russian.result(), Outcome::Win(Color::White));
}

#[test]
fn queen_slides_and_captures_from_afar() {
    let state = position(
        Variant::International,
        Color::White,
        &[((9, 0), Piece::WhiteQueen), ((4, 5), Piece::BlackRegular)],
    );
    let landings: Vec<Square> = state
        .legal_moves_from(Square::new(9, 0))
        .iter()
        .map(Move::to)
        .collect();
    assert_eq!(
        landings,
        vec![
            Square::new(3, 6),
            Square::new(2, 7),
            Square::new(1, 8),
            Square::new(0, 9),
        ]
    );
}

#[test]
fn maximal_capture_discards_shorter_chains_of_other_pieces() {
    let pieces = [
        ((7, 2), Piece::WhiteRegular),
        ((6, 3), Piece::BlackRegular),
        ((5, 0), Piece::WhiteRegular),
        ((4, 1), Piece::BlackRegular),
        ((2, 1), Piece::BlackRegular),
    ];
    let international_like = position(Variant::Brazilian, Color::White, &pieces);
    assert!(international_like
        .iter_legal_moves()
        .all(|mv| mv.len() == 2 && mv.from() == Square::new(5, 0)));

    let russian = position(Variant::Russian, Color::White, &pieces);
    assert_eq!(russian.legal_moves().len(), 2);
}

#[test]
fn blocked_side_loses() {
    let state = position(
        Variant::Russian,
        Color::White,
        &[
            ((7, 0), Piece::WhiteRegular),
            ((6, 1), Piece::BlackRegular),
            ((5, 2), Piece::BlackRegular),
        ],
    );
    assert!(state.legal_moves().is_empty());
    assert_eq!(state.result(), Outcome::Win(Color::Black));
}

#[test]
fn moves_parse_against_legal_set() {
    let state = GameState::new(Variant::Russian);
    let path: MovePath = "5,2-4,3".parse().unwrap();
    let found: Vec<&Move> = state.iter_legal_moves().filter(|mv| path.matches(mv)).collect();
    assert_eq!(found.len(), 1);
}

#[test]
fn board_copy_is_independent() {
    let mut state = GameState::new(Variant::Canadian);
    let snapshot = state.board_copy();
    assert_eq!(snapshot.size(), BoardSize::Twelve);

    let mv = state.iter_legal_moves().next().unwrap().clone();
    state.apply_move(&mv);
    assert_ne!(&snapshot, state.board());
    assert!(snapshot.piece_at(mv.from()).is_regular());
}
