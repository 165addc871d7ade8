use checkers_core::{Board, BoardSize, Color};

const REGULAR_VALUE: f32 = 3.0;
const QUEEN_VALUE: f32 = 12.0;

/// Positional bonus tables for one board width.
struct Tables {
    /// Indexed by distance from the piece's own back row.
    regular_rows: &'static [f32],
    queen_rows: &'static [f32],
    /// Indexed by `col / 2`.
    columns: &'static [f32],
}

static TABLES_8: Tables = Tables {
    regular_rows: &[0.0, 0.0, 0.0, 0.2, 0.4, 0.5, 0.7, 1.0],
    queen_rows: &[0.0, 0.3, 0.4, 0.5, 0.5, 0.4, 0.3, 0.0],
    columns: &[0.0, 0.06, 0.06, 0.0],
};

static TABLES_10: Tables = Tables {
    regular_rows: &[0.0, 0.0, 0.0, 0.0, 0.2, 0.3, 0.4, 0.5, 0.7, 1.0],
    queen_rows: &[0.0, 0.3, 0.4, 0.5, 0.6, 0.6, 0.5, 0.4, 0.3, 0.0],
    columns: &[0.0, 0.06, 0.08, 0.06, 0.0],
};

static TABLES_12: Tables = Tables {
    regular_rows: &[0.0, 0.0, 0.0, 0.0, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 1.0],
    queen_rows: &[0.0, 0.3, 0.4, 0.5, 0.6, 0.7, 0.7, 0.6, 0.5, 0.4, 0.3, 0.0],
    columns: &[0.0, 0.06, 0.08, 0.8, 0.06, 0.0],
};

fn tables(size: BoardSize) -> &'static Tables {
    match size {
        BoardSize::Eight => &TABLES_8,
        BoardSize::Ten => &TABLES_10,
        BoardSize::Twelve => &TABLES_12,
    }
}

/// Scores a board from White's point of view.
/// Positive values favor White, negative favor Black.
pub fn evaluate(board: &Board) -> f32 {
    let tables = tables(board.size());
    let last_row = board.width() - 1;

    let mut score = 0.0;
    for color in [Color::White, Color::Black] {
        let sign = match color {
            Color::White => 1.0,
            Color::Black => -1.0,
        };
        for (square, piece) in board.pieces(color) {
            // White's back row is the last one.
            let advance = usize::from(match color {
                Color::White => last_row - square.row,
                Color::Black => square.row,
            });

            let (base, rows) = if piece.is_queen() {
                (QUEEN_VALUE, tables.queen_rows)
            } else {
                (REGULAR_VALUE, tables.regular_rows)
            };
            let value = base + rows[advance] + tables.columns[square.col as usize / 2];
            score += sign * value;
        }
    }
    score
}

/// Static evaluation used at the leaves of a search.
pub trait Evaluator {
    fn evaluate(&self, board: &Board) -> f32;
}

/// The default material and placement heuristic.
#[derive(Clone, Copy, Debug, Default)]
pub struct Heuristic;

impl Evaluator for Heuristic {
    fn evaluate(&self, board: &Board) -> f32 {
        evaluate(board)
    }
}
