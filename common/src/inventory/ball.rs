use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// The special balls that are tracked.
///
/// Declaration order is the sort order used on the sheet and in every table,
/// so do not reorder the variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Ball {
    Beast,
    Dream,
    Fast,
    Friend,
    Heavy,
    Level,
    Love,
    Lure,
    Moon,
    Safari,
    Sport,
}

impl Ball {
    pub const ALL: [Ball; 11] = [
        Ball::Beast,
        Ball::Dream,
        Ball::Fast,
        Ball::Friend,
        Ball::Heavy,
        Ball::Level,
        Ball::Love,
        Ball::Lure,
        Ball::Moon,
        Ball::Safari,
        Ball::Sport,
    ];

    /// Canonical name as it appears in the sheet's ball column.
    pub fn name(self) -> &'static str {
        match self {
            Ball::Beast => "Beast",
            Ball::Dream => "Dream",
            Ball::Fast => "Fast",
            Ball::Friend => "Friend",
            Ball::Heavy => "Heavy",
            Ball::Level => "Level",
            Ball::Love => "Love",
            Ball::Lure => "Lure",
            Ball::Moon => "Moon",
            Ball::Safari => "Safari",
            Ball::Sport => "Sport",
        }
    }

    /// Parses a (case-insensitive) prefix of exactly one ball name.
    ///
    /// `"b"` is Beast and `"fr"` is Friend, but `"s"` is rejected since it
    /// could be Safari or Sport. There is no tie-breaking.
    pub fn parse_prefix(prefix: &str) -> Result<Ball, ParseError> {
        let lower = prefix.to_lowercase();
        let mut matches = Ball::ALL
            .into_iter()
            .filter(|ball| ball.name().to_lowercase().starts_with(&lower));

        match (matches.next(), matches.next()) {
            (Some(ball), None) => Ok(ball),
            _ => Err(ParseError::AmbiguousOrUnknownBall(prefix.to_string())),
        }
    }
}

impl fmt::Display for Ball {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ball {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ball::parse_prefix(s)
    }
}
