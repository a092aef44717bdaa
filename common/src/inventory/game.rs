use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// The games / profiles that on-hands are stored in.
///
/// Declaration order matches the sheet's quantity columns, left to right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GameProfile {
    Swsh1,
    Swsh2,
    Sv1,
    Sv2,
    Bdsp,
}

impl GameProfile {
    pub const ALL: [GameProfile; 5] = [
        GameProfile::Swsh1,
        GameProfile::Swsh2,
        GameProfile::Sv1,
        GameProfile::Sv2,
        GameProfile::Bdsp,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Position in declared order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short tag accepted on the command line and in tagged input lines.
    pub fn tag(self) -> &'static str {
        match self {
            GameProfile::Swsh1 => "swsh1",
            GameProfile::Swsh2 => "swsh2",
            GameProfile::Sv1 => "sv1",
            GameProfile::Sv2 => "sv2",
            GameProfile::Bdsp => "bdsp",
        }
    }

    /// Human label, as used in the sheet's header row.
    pub fn label(self) -> &'static str {
        match self {
            GameProfile::Swsh1 => "SwSh 4+IV",
            GameProfile::Swsh2 => "SwSh 3IV",
            GameProfile::Sv1 => "SV 4+IV",
            GameProfile::Sv2 => "SV 3IV",
            GameProfile::Bdsp => "BDSP",
        }
    }

    /// Exact, case-insensitive match against the short tags.
    pub fn parse_tag(tag: &str) -> Result<GameProfile, ParseError> {
        let lower = tag.to_lowercase();
        GameProfile::ALL
            .into_iter()
            .find(|game| game.tag() == lower)
            .ok_or_else(|| ParseError::UnknownGameProfile(tag.to_string()))
    }
}

impl fmt::Display for GameProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GameProfile {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameProfile::parse_tag(s)
    }
}
