//! Regional rule sets.

use crate::board::BoardSize;
use crate::error::VariantParseError;
use std::fmt;
use std::str::FromStr;

/// A named rule set: board size, starting layout and capture policy.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Variant {
    #[default]
    Russian,
    International,
    Canadian,
    Brazilian,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Russian,
        Variant::International,
        Variant::Canadian,
        Variant::Brazilian,
    ];

    pub const fn board_size(self) -> BoardSize {
        match self {
            Variant::Russian | Variant::Brazilian => BoardSize::Eight,
            Variant::International => BoardSize::Ten,
            Variant::Canadian => BoardSize::Twelve,
        }
    }

    /// Black fills the dark squares of rows `0..black_rows()`.
    pub const fn black_rows(self) -> u8 {
        match self {
            Variant::Russian | Variant::Brazilian => 3,
            Variant::International => 4,
            Variant::Canadian => 5,
        }
    }

    /// White fills the dark squares from this row to the last one.
    pub const fn white_first_row(self) -> u8 {
        self.board_size().width() - self.black_rows()
    }

    /// Whether only the longest capture chains are legal.
    pub const fn requires_maximal_capture(self) -> bool {
        !matches!(self, Variant::Russian)
    }

    /// Whether a regular piece crowns as soon as it lands on the last row,
    /// even in the middle of a capture chain.
    pub const fn promotes_mid_capture(self) -> bool {
        matches!(self, Variant::Russian)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Variant::Russian => "russian",
            Variant::International => "international",
            Variant::Canadian => "canadian",
            Variant::Brazilian => "brazilian",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = VariantParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Variant::ALL
            .into_iter()
            .find(|v| v.name() == lower)
            .ok_or_else(|| VariantParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layouts() {
        assert_eq!(Variant::Russian.white_first_row(), 5);
        assert_eq!(Variant::International.white_first_row(), 6);
        assert_eq!(Variant::Canadian.white_first_row(), 7);
        assert_eq!(Variant::Brazilian.board_size(), BoardSize::Eight);
    }

    #[test]
    fn test_capture_policies() {
        assert!(!Variant::Russian.requires_maximal_capture());
        assert!(Variant::Russian.promotes_mid_capture());
        for v in [Variant::International, Variant::Canadian, Variant::Brazilian] {
            assert!(v.requires_maximal_capture());
            assert!(!v.promotes_mid_capture());
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("International".parse::<Variant>(), Ok(Variant::International));
        assert_eq!(" brazilian ".parse::<Variant>(), Ok(Variant::Brazilian));
        assert!("english".parse::<Variant>().is_err());
        for v in Variant::ALL {
            assert_eq!(v.to_string().parse::<Variant>(), Ok(v));
        }
    }
}
