use crate::error::{MoveParseError, SquareParseError};
use std::fmt;
use std::str::FromStr;

/// Represents one of the two players.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Returns the opposite color.
    pub const fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward step. White starts on the high rows.
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Returns the row on which regular pieces of this color promote.
    pub const fn promotion_row(self, width: u8) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => width - 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("White"),
            Color::Black => f.write_str("Black"),
        }
    }
}

/// Contents of a single dark square.
///
/// `Captured` marks a piece already jumped in the chain currently being
/// explored. It only ever lives on the scratch boards of the capture search.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Piece {
    #[default]
    Empty,
    WhiteRegular,
    BlackRegular,
    WhiteQueen,
    BlackQueen,
    Captured,
}

impl Piece {
    pub const fn regular(color: Color) -> Self {
        match color {
            Color::White => Piece::WhiteRegular,
            Color::Black => Piece::BlackRegular,
        }
    }

    pub const fn queen(color: Color) -> Self {
        match color {
            Color::White => Piece::WhiteQueen,
            Color::Black => Piece::BlackQueen,
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Piece::Empty)
    }

    /// True for anything that is not `Empty`, including the captured marker.
    pub const fn is_occupied(self) -> bool {
        !self.is_empty()
    }

    pub const fn is_regular(self) -> bool {
        matches!(self, Piece::WhiteRegular | Piece::BlackRegular)
    }

    pub const fn is_queen(self) -> bool {
        matches!(self, Piece::WhiteQueen | Piece::BlackQueen)
    }

    pub const fn is_captured(self) -> bool {
        matches!(self, Piece::Captured)
    }

    /// Returns the owner of a real piece; `None` for empty and captured squares.
    pub const fn color(self) -> Option<Color> {
        match self {
            Piece::WhiteRegular | Piece::WhiteQueen => Some(Color::White),
            Piece::BlackRegular | Piece::BlackQueen => Some(Color::Black),
            Piece::Empty | Piece::Captured => None,
        }
    }

    /// True if the square holds a real piece of `color`.
    pub fn is_color(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    /// Returns the queen of the same color.
    /// Panics if the piece is not a regular piece.
    pub fn promoted(self) -> Self {
        match self {
            Piece::WhiteRegular => Piece::WhiteQueen,
            Piece::BlackRegular => Piece::BlackQueen,
            other => panic!("cannot promote {:?}", other),
        }
    }
}

/// A square on the board, row 0 being Black's back row.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Playable squares are the ones where `row + col` is odd.
    pub const fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Returns the square shifted by the given deltas, if both coordinates stay
    /// non-negative. The upper bound depends on the board and is checked there.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Square { row, col })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .trim()
            .split_once(',')
            .ok_or_else(|| SquareParseError(s.to_string()))?;
        let row = row
            .trim()
            .parse()
            .map_err(|_| SquareParseError(s.to_string()))?;
        let col = col
            .trim()
            .parse()
            .map_err(|_| SquareParseError(s.to_string()))?;
        Ok(Square { row, col })
    }
}

/// One leg of a move: a slide, a single step, or a jump over `captured`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Step {
    pub from: Square,
    pub to: Square,
    pub captured: Option<Square>,
}

/// A full turn: a single non-capturing step or a chain of one or more jumps.
///
/// Chains are assembled from the innermost continuation outwards with
/// [`Move::then`], so a move is always a finite owned list.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Move {
    steps: Vec<Step>,
}

impl Move {
    /// Creates a non-capturing move.
    pub fn simple(from: Square, to: Square) -> Self {
        Self {
            steps: vec![Step {
                from,
                to,
                captured: None,
            }],
        }
    }

    /// Creates a single jump over `captured`.
    pub fn jump(from: Square, to: Square, captured: Square) -> Self {
        Self {
            steps: vec![Step {
                from,
                to,
                captured: Some(captured),
            }],
        }
    }

    /// Returns this move followed by `continuation`.
    pub fn then(mut self, continuation: &Move) -> Self {
        debug_assert_eq!(self.to(), continuation.from());
        self.steps.extend_from_slice(&continuation.steps);
        self
    }

    /// Square the moving piece starts from.
    pub fn from(&self) -> Square {
        self.steps[0].from
    }

    /// Square the moving piece ends on.
    pub fn to(&self) -> Square {
        self.steps[self.steps.len() - 1].to
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps, i.e. the number of jumps for a capture.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn is_capture(&self) -> bool {
        self.steps[0].captured.is_some()
    }

    pub fn captured_squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.steps.iter().filter_map(|step| step.captured)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}", self.from())?;
        for step in &self.steps {
            write!(f, "{}{}", separator, step.to)?;
        }
        Ok(())
    }
}

/// Text form of a move: the visited squares separated by `-` or `x`.
///
/// Only the path is parsed; captured squares are recovered by matching the
/// path against the legal moves of a position.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MovePath(pub Vec<Square>);

impl MovePath {
    /// True if `mv` visits exactly these squares.
    pub fn matches(&self, mv: &Move) -> bool {
        self.0.len() == mv.len() + 1
            && self.0[0] == mv.from()
            && mv.steps().iter().zip(&self.0[1..]).all(|(s, sq)| s.to == *sq)
    }
}

impl FromStr for MovePath {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squares = s
            .split(|c| c == '-' || c == 'x')
            .map(str::parse)
            .collect::<Result<Vec<Square>, _>>()?;
        if squares.len() < 2 {
            return Err(MoveParseError::TooShort(s.to_string()));
        }
        Ok(MovePath(squares))
    }
}
