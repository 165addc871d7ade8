//! Error types for the rules engine.
//!
//! Configuration and input problems are reported through these types.
//! Caller bugs (moving the wrong color, addressing a light square) panic instead.

use crate::board::BoardSize;
use thiserror::Error;

/// Unknown variant name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown checkers variant: {0:?} (expected russian, international, canadian or brazilian)")]
pub struct VariantParseError(pub String);

/// Malformed `row,col` square.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid square {0:?} (expected row,col)")]
pub struct SquareParseError(pub String);

/// Malformed move text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    #[error(transparent)]
    Square(#[from] SquareParseError),

    #[error("move {0:?} needs at least two squares")]
    TooShort(String),
}

/// Errors raised by board storage.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The size of a board can only change while it is empty.
    #[error("cannot resize a non-empty {current:?} board to {requested:?}")]
    Occupied {
        current: BoardSize,
        requested: BoardSize,
    },
}

/// Errors raised when building a game from a custom position.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("board is {board:?} but the variant plays on {variant:?}")]
    SizeMismatch {
        board: BoardSize,
        variant: BoardSize,
    },

    #[error("captured marker left on the board at {0}")]
    CapturedOnBoard(crate::types::Square),
}
