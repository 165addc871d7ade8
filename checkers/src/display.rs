use checkers_core::{Board, GameState, Outcome, Piece, Square};
use std::fmt::Write;

fn symbol(piece: Piece) -> char {
    match piece {
        Piece::Empty => '.',
        Piece::WhiteRegular => 'w',
        Piece::WhiteQueen => 'W',
        Piece::BlackRegular => 'b',
        Piece::BlackQueen => 'B',
        Piece::Captured => 'x',
    }
}

/// Draws the board with row and column numbers. Light squares are blank.
pub fn render_board(board: &Board) -> String {
    let width = board.width();
    let mut out = String::from("   ");
    for col in 0..width {
        let _ = write!(out, "{col:>3}");
    }
    out.push('\n');

    for row in 0..width {
        let _ = write!(out, "{row:>3}");
        for col in 0..width {
            let square = Square::new(row, col);
            let symbol = if square.is_dark() {
                symbol(board.piece_at(square))
            } else {
                ' '
            };
            let _ = write!(out, "{symbol:>3}");
        }
        out.push('\n');
    }
    out
}

/// One-line summary of whose turn it is or who won.
pub fn status_line(state: &GameState) -> String {
    match state.result() {
        Outcome::Win(winner) => format!("{winner} wins"),
        Outcome::Ongoing => format!(
            "{} to move ({} legal moves)",
            state.current_color(),
            state.legal_move_count()
        ),
    }
}
