/// Board storage for every supported size.
/// Only dark squares are stored; the board knows nothing about the rules.
use crate::error::BoardError;
use crate::types::*;

/// Number of dark squares on the largest (12×12) board.
pub const MAX_SQUARES: usize = 72;

/// The supported board sizes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum BoardSize {
    #[default]
    Eight,
    Ten,
    Twelve,
}

impl BoardSize {
    /// Number of rows and columns.
    pub const fn width(self) -> u8 {
        match self {
            BoardSize::Eight => 8,
            BoardSize::Ten => 10,
            BoardSize::Twelve => 12,
        }
    }

    /// Number of playable squares.
    pub const fn squares(self) -> usize {
        let width = self.width() as usize;
        width * width / 2
    }
}

/// Array-based board.
/// A dark square `(row, col)` lives at `(row * width + col) / 2`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    squares: [Piece; MAX_SQUARES],
    size: BoardSize,
}

impl Board {
    /// Creates an empty board of the given size.
    pub const fn empty(size: BoardSize) -> Self {
        Self {
            squares: [Piece::Empty; MAX_SQUARES],
            size,
        }
    }

    pub const fn size(&self) -> BoardSize {
        self.size
    }

    pub const fn width(&self) -> u8 {
        self.size.width()
    }

    /// Changes the board size.
    /// Only allowed while the board is empty or when the size is unchanged.
    pub fn set_size(&mut self, size: BoardSize) -> Result<(), BoardError> {
        if size != self.size && !self.is_empty() {
            return Err(BoardError::Occupied {
                current: self.size,
                requested: size,
            });
        }
        self.size = size;
        Ok(())
    }

    /// Empties every square. The size is kept.
    pub fn clear(&mut self) {
        self.squares = [Piece::Empty; MAX_SQUARES];
    }

    /// Returns true if no square holds anything.
    pub fn is_empty(&self) -> bool {
        self.squares.iter().all(|p| p.is_empty())
    }

    /// Returns true if the square lies on this board.
    pub fn contains(&self, square: Square) -> bool {
        square.row < self.width() && square.col < self.width()
    }

    /// Returns the neighbouring square in the given direction, if it is on the board.
    pub fn step(&self, square: Square, dr: i8, dc: i8) -> Option<Square> {
        square.offset(dr, dc).filter(|sq| self.contains(*sq))
    }

    fn index(&self, square: Square) -> usize {
        assert!(
            self.contains(square),
            "square {} outside the {}x{} board",
            square,
            self.width(),
            self.width()
        );
        assert!(square.is_dark(), "square {} is not a playable square", square);
        (square.row as usize * self.width() as usize + square.col as usize) / 2
    }

    /// Gets the piece at the given square.
    /// Panics if the square is off the board or a light square.
    pub fn piece_at(&self, square: Square) -> Piece {
        self.squares[self.index(square)]
    }

    /// Sets the piece at the given square.
    pub fn set_piece(&mut self, square: Square, piece: Piece) {
        let index = self.index(square);
        self.squares[index] = piece;
    }

    /// Moves whatever is on `from` to `to`, leaving `from` empty.
    pub fn move_piece(&mut self, from: Square, to: Square) {
        let a = self.index(from);
        let b = self.index(to);
        self.squares.swap(a, b);
    }

    /// Iterates the playable squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = Square> {
        let width = self.width();
        (0..width).flat_map(move |row| {
            let first = if row % 2 == 1 { 0 } else { 1 };
            (first..width).step_by(2).map(move |col| Square::new(row, col))
        })
    }

    /// Iterates the squares holding pieces of `color`.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares()
            .map(|sq| (sq, self.piece_at(sq)))
            .filter(move |(_, piece)| piece.is_color(color))
    }

    /// Counts the pieces of `color`.
    pub fn count(&self, color: Color) -> usize {
        self.pieces(color).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(BoardSize::default())
    }
}
