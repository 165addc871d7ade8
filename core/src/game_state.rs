/// Game state: the authoritative board, the side to move and the legal moves.
/// This module provides the main interface for playing a game.
use crate::board::*;
use crate::error::GameError;
use crate::move_gen::{generate_legal_moves, MoveMap};
use crate::types::*;
use crate::variant::Variant;
use tracing::{debug, trace};

/// Outcome of a game as seen from the current position.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Outcome {
    Ongoing,
    /// The side to move has no legal move and has lost.
    Win(Color),
}

impl Outcome {
    pub const fn is_over(self) -> bool {
        matches!(self, Outcome::Win(_))
    }

    pub const fn winner(self) -> Option<Color> {
        match self {
            Outcome::Win(color) => Some(color),
            Outcome::Ongoing => None,
        }
    }
}

/// Complete state of a game.
///
/// `legal_moves` always matches the board and side to move: it is
/// recomputed by every operation that changes either.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameState {
    board: Board,
    turn: Color,
    variant: Variant,
    legal_moves: MoveMap,
}

impl GameState {
    /// Creates a game in the starting position of `variant`.
    pub fn new(variant: Variant) -> Self {
        let mut state = Self::empty(variant);
        state.reset(variant);
        state
    }

    /// Creates a game with an empty board, White to move.
    pub fn empty(variant: Variant) -> Self {
        Self {
            board: Board::empty(variant.board_size()),
            turn: Color::White,
            variant,
            legal_moves: MoveMap::new(),
        }
    }

    /// Creates a game from a custom position.
    pub fn from_position(variant: Variant, board: Board, turn: Color) -> Result<Self, GameError> {
        if board.size() != variant.board_size() {
            return Err(GameError::SizeMismatch {
                board: board.size(),
                variant: variant.board_size(),
            });
        }
        if let Some(square) = board.squares().find(|sq| board.piece_at(*sq).is_captured()) {
            return Err(GameError::CapturedOnBoard(square));
        }

        let mut state = Self {
            board,
            turn,
            variant,
            legal_moves: MoveMap::new(),
        };
        state.refresh_legal_moves();
        Ok(state)
    }

    /// Clears the board and sets up the starting position of `variant`.
    pub fn reset(&mut self, variant: Variant) {
        self.set_variant(variant);
        self.turn = Color::White;

        let white_first_row = variant.white_first_row();
        let squares: Vec<Square> = self.board.squares().collect();
        for square in squares {
            if square.row < variant.black_rows() {
                self.board.set_piece(square, Piece::BlackRegular);
            } else if square.row >= white_first_row {
                self.board.set_piece(square, Piece::WhiteRegular);
            }
        }

        self.refresh_legal_moves();
        debug!(%variant, "new game");
    }

    /// Switches to another variant, leaving an empty board of its size.
    /// The side to move is kept.
    pub fn set_variant(&mut self, variant: Variant) {
        self.board = Board::empty(variant.board_size());
        self.variant = variant;
        self.refresh_legal_moves();
        debug!(%variant, "variant selected");
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the side to move.
    pub fn current_color(&self) -> Color {
        self.turn
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns an owned snapshot of the board.
    pub fn board_copy(&self) -> Board {
        self.board.clone()
    }

    /// All legal moves of the side to move, by starting square.
    pub fn legal_moves(&self) -> &MoveMap {
        &self.legal_moves
    }

    /// Legal moves of the piece on `square`; empty if it has none.
    pub fn legal_moves_from(&self, square: Square) -> &[Move] {
        self.legal_moves
            .get(&square)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterates every legal move.
    pub fn iter_legal_moves(&self) -> impl Iterator<Item = &Move> {
        self.legal_moves.values().flatten()
    }

    /// Total number of legal moves.
    pub fn legal_move_count(&self) -> usize {
        self.legal_moves.values().map(Vec::len).sum()
    }

    pub fn is_legal(&self, mv: &Move) -> bool {
        self.legal_moves_from(mv.from()).contains(mv)
    }

    /// Applies a move and passes the turn.
    ///
    /// Captured pieces are removed step by step. A regular piece is crowned
    /// when a step lands on its last row: on any step in variants that crown
    /// mid-capture, otherwise only on the final step.
    ///
    /// Panics if the moving piece does not belong to the side to move.
    pub fn apply_move(&mut self, mv: &Move) {
        let mover = self.board.piece_at(mv.from());
        assert!(
            mover.is_color(self.turn),
            "{} cannot move {:?} from {}",
            self.turn,
            mover,
            mv.from()
        );

        let promotion_row = self.turn.promotion_row(self.board.width());
        let last = mv.len() - 1;
        for (i, step) in mv.steps().iter().enumerate() {
            if let Some(captured) = step.captured {
                self.board.set_piece(captured, Piece::Empty);
            }
            self.board.move_piece(step.from, step.to);

            let piece = self.board.piece_at(step.to);
            let may_promote = i == last || self.variant.promotes_mid_capture();
            if may_promote && piece.is_regular() && step.to.row == promotion_row {
                self.board.set_piece(step.to, piece.promoted());
            }
        }
        trace!(color = %self.turn, %mv, "move applied");

        self.turn = self.turn.opponent();
        self.refresh_legal_moves();
    }

    /// Returns a copy of this state with `mv` applied.
    pub fn with_move(&self, mv: &Move) -> Self {
        let mut next = self.clone();
        next.apply_move(mv);
        next
    }

    /// The side to move loses when it has no legal move.
    pub fn result(&self) -> Outcome {
        if self.legal_moves.is_empty() {
            Outcome::Win(self.turn.opponent())
        } else {
            Outcome::Ongoing
        }
    }

    fn refresh_legal_moves(&mut self) {
        self.legal_moves = generate_legal_moves(&self.board, self.turn, self.variant);
        trace!(
            color = %self.turn,
            origins = self.legal_moves.len(),
            "legal moves generated"
        );
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}
