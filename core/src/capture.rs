use crate::board::Board;
use crate::types::{Move, Piece, Square, Step};
use crate::variant::Variant;

/// The four diagonal directions as (row, col) deltas.
pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Enumerates every maximal capture chain for the piece on `from`.
///
/// The search runs on scratch copies of `board`: jumped pieces are replaced by
/// [`Piece::Captured`] so they block further movement and cannot be taken
/// twice, but they are only removed when the move is applied for real.
/// A branching point yields one chain per branch; picking among chains of
/// different lengths is left to the caller.
///
/// An off-board, light, empty or captured square yields no chains.
pub fn capture_chains(board: &Board, from: Square, variant: Variant) -> Vec<Move> {
    let mut chains = Vec::new();
    if board.contains(from) && from.is_dark() {
        find_captures(board, from, variant, &mut chains);
    }
    chains
}

fn find_captures(board: &Board, from: Square, variant: Variant, chains: &mut Vec<Move>) {
    let piece = board.piece_at(from);
    let Some(color) = piece.color() else {
        return;
    };
    let enemy_color = color.opponent();

    for &(dr, dc) in &DIAGONALS {
        if piece.is_regular() {
            let Some(enemy) = board.step(from, dr, dc) else {
                continue;
            };
            if !board.piece_at(enemy).is_color(enemy_color) {
                continue;
            }
            if let Some(landing) = board.step(enemy, dr, dc) {
                if board.piece_at(landing).is_empty() {
                    extend_capture(board, from, enemy, landing, variant, chains);
                }
            }
        } else {
            // Slide to the first occupied square; only an enemy there can be taken.
            let mut cursor = board.step(from, dr, dc);
            while let Some(sq) = cursor {
                if !board.piece_at(sq).is_empty() {
                    break;
                }
                cursor = board.step(sq, dr, dc);
            }
            let Some(enemy) = cursor else {
                continue;
            };
            if !board.piece_at(enemy).is_color(enemy_color) {
                continue;
            }

            let mut landing = board.step(enemy, dr, dc);
            while let Some(sq) = landing {
                if !board.piece_at(sq).is_empty() {
                    break;
                }
                extend_capture(board, from, enemy, sq, variant, chains);
                landing = board.step(sq, dr, dc);
            }
            drop_premature_stops(from, enemy, chains);
        }
    }
}

/// Plays one jump on a copy of `board` and collects the chains that follow it.
fn extend_capture(
    board: &Board,
    from: Square,
    enemy: Square,
    landing: Square,
    variant: Variant,
    chains: &mut Vec<Move>,
) {
    let mut next = board.clone();
    next.move_piece(from, landing);
    next.set_piece(enemy, Piece::Captured);

    let piece = next.piece_at(landing);
    if variant.promotes_mid_capture() && piece.is_regular() {
        if let Some(color) = piece.color() {
            if landing.row == color.promotion_row(next.width()) {
                next.set_piece(landing, piece.promoted());
            }
        }
    }

    let jump = Move::jump(from, landing, enemy);
    let mut continuations = Vec::new();
    find_captures(&next, landing, variant, &mut continuations);

    if continuations.is_empty() {
        chains.push(jump);
    } else {
        chains.extend(continuations.iter().map(|rest| jump.clone().then(rest)));
    }
}

/// A queen that can keep capturing after taking `enemy` must do so.
///
/// A link that jumps `enemy` from `from` is looked for anywhere in a chain,
/// not only in its first step, since a queen chain can pass through its
/// starting square again. Once any such link is followed by another jump,
/// every chain in which such a link is the last one is removed.
fn drop_premature_stops(from: Square, enemy: Square, chains: &mut Vec<Move>) {
    let takes_enemy = |step: &Step| step.from == from && step.captured == Some(enemy);
    let continues = |mv: &Move| {
        mv.steps()
            .split_last()
            .is_some_and(|(_, rest)| rest.iter().any(|step| takes_enemy(step)))
    };
    let stops = |mv: &Move| mv.steps().last().is_some_and(|step| takes_enemy(step));

    if chains.iter().any(continues) {
        chains.retain(|mv| !stops(mv));
    }
}
