use crate::board::Board;
use crate::capture::{capture_chains, DIAGONALS};
use crate::types::{Color, Move, Square};
use crate::variant::Variant;
use std::collections::BTreeMap;

/// Legal moves grouped by the square the moving piece starts on.
pub type MoveMap = BTreeMap<Square, Vec<Move>>;

/// Generates all legal moves for `color`.
///
/// Capturing is mandatory: if any piece can capture, only captures are
/// returned. Variants with the maximal capture rule further keep only the
/// chains with the most jumps across all pieces.
pub fn generate_legal_moves(board: &Board, color: Color, variant: Variant) -> MoveMap {
    let mut moves = collect(board, color, |sq| capture_chains(board, sq, variant));

    if !moves.is_empty() {
        if variant.requires_maximal_capture() {
            retain_longest(&mut moves);
        }
        return moves;
    }

    collect(board, color, |sq| simple_moves(board, sq))
}

fn collect(board: &Board, color: Color, mut generate: impl FnMut(Square) -> Vec<Move>) -> MoveMap {
    let mut moves = MoveMap::new();
    for (square, _) in board.pieces(color) {
        let list = generate(square);
        if !list.is_empty() {
            moves.insert(square, list);
        }
    }
    moves
}

/// Removes every chain shorter than the longest one, then drops squares left
/// without moves.
fn retain_longest(moves: &mut MoveMap) {
    let longest = moves
        .values()
        .flatten()
        .map(Move::len)
        .max()
        .unwrap_or(0);

    for list in moves.values_mut() {
        list.retain(|mv| mv.len() == longest);
    }
    moves.retain(|_, list| !list.is_empty());
}

/// Generates the non-capturing moves of the piece on `from`: one diagonal
/// step forward for a regular piece, any distance over empty squares for a
/// queen.
pub fn simple_moves(board: &Board, from: Square) -> Vec<Move> {
    let piece = board.piece_at(from);
    let mut moves = Vec::new();

    if piece.is_regular() {
        let Some(color) = piece.color() else {
            return moves;
        };
        for dc in [1, -1] {
            if let Some(to) = board.step(from, color.forward(), dc) {
                if board.piece_at(to).is_empty() {
                    moves.push(Move::simple(from, to));
                }
            }
        }
    } else if piece.is_queen() {
        for &(dr, dc) in &DIAGONALS {
            let mut cursor = board.step(from, dr, dc);
            while let Some(to) = cursor {
                if !board.piece_at(to).is_empty() {
                    break;
                }
                moves.push(Move::simple(from, to));
                cursor = board.step(to, dr, dc);
            }
        }
    }

    moves
}
