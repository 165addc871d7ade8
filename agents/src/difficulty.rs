use crate::error::DifficultyParseError;
use std::fmt;
use std::str::FromStr;

/// Playing strength offered to the user.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Difficulty {
    /// Plays random legal moves.
    Novice,
    #[default]
    Easy,
    Medium,
    Hard,
    Grandmaster,
}

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Novice,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Grandmaster,
    ];

    /// Search depth in plies, `None` for the random engine.
    pub const fn search_depth(self) -> Option<u8> {
        match self {
            Difficulty::Novice => None,
            Difficulty::Easy => Some(2),
            Difficulty::Medium => Some(4),
            Difficulty::Hard => Some(6),
            Difficulty::Grandmaster => Some(8),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Novice => "novice",
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Grandmaster => "grandmaster",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name() == lower)
            .ok_or_else(|| DifficultyParseError(s.to_string()))
    }
}
