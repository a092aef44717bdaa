//! # Identity
//!
//! An inventory slot is keyed by a ball and a canonical species name. Species
//! text coming from the command line or from the sheet is normalized by
//! [`canonicalize`] before it is ever compared, so `"indeedee-f"` and
//! `"Indeedee-F"` land in the same slot.

use std::fmt;

use crate::error::ParseError;
use crate::inventory::Ball;

/// Two-word family name, matched case-insensitively, and the single token it
/// collapses to while the name is being re-capitalized.
const COLLAPSED_NAMES: &[(&str, &str)] = &[("mr. mime", "mime")];

/// Segments that expand back to their display form after capitalization.
const EXPANDED_SEGMENTS: &[(&str, &str)] = &[("Mime", "Mr. Mime")];

/// Names that need diacritics, replaced as exact substrings.
const DIACRITICS: &[(&str, &str)] = &[("Flabebe", "Flabébé")];

/// Converts a species name to its canonical capitalisation.
///
/// ```
/// use onhands_common::inventory::identity::canonicalize;
///
/// assert_eq!(canonicalize("togepi"), "Togepi");
/// assert_eq!(canonicalize("indeedee-f"), "Indeedee-F");
/// assert_eq!(canonicalize("jangmo-o"), "Jangmo-o");
/// assert_eq!(canonicalize("flabebe-blue"), "Flabébé-Blue");
/// assert_eq!(canonicalize("mime-galar"), "Mr. Mime-Galar");
/// ```
pub fn canonicalize(raw_species: &str) -> String {
    let mut lower = raw_species.to_lowercase();
    for (name, token) in COLLAPSED_NAMES {
        lower = lower.replace(name, token);
    }

    let mut name = lower
        .split('-')
        .map(capitalise_segment)
        .map(|segment| {
            EXPANDED_SEGMENTS
                .iter()
                .find(|(token, _)| *token == segment)
                .map(|(_, display)| display.to_string())
                .unwrap_or(segment)
        })
        .collect::<Vec<String>>()
        .join("-");

    for (plain, accented) in DIACRITICS {
        name = name.replace(plain, accented);
    }
    name
}

fn capitalise_segment(segment: &str) -> String {
    // Jangmo-o keeps its lowercase suffix.
    if segment == "o" {
        return segment.to_string();
    }

    let mut chars = segment.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    // Multi-char capitals (`ß` -> `SS`) would not survive a second pass.
    let mut upper = first.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(capital), None) => std::iter::once(capital).chain(chars).collect(),
        _ => segment.to_string(),
    }
}

/// A (ball, species) pair identifying one inventory slot.
///
/// Ordering is by the ball's declared position, then by species name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identity {
    ball: Ball,
    species: String,
}

impl Identity {
    /// Builds an identity, canonicalizing the species name.
    pub fn new(ball: Ball, species: &str) -> Self {
        Self {
            ball,
            species: canonicalize(species),
        }
    }

    /// Builds an identity from a ball prefix and raw species text.
    ///
    /// Species text that is empty after trimming is rejected.
    pub fn parse(ball_prefix: &str, species: &str) -> Result<Self, ParseError> {
        let ball = Ball::parse_prefix(ball_prefix)?;
        let species = species.trim();
        if species.is_empty() {
            return Err(ParseError::MissingSpecies(ball_prefix.to_string()));
        }
        Ok(Self::new(ball, species))
    }

    pub fn ball(&self) -> Ball {
        self.ball
    }

    pub fn species(&self) -> &str {
        &self.species
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ball, self.species)
    }
}
