//! Error taxonomy for parsing and inventory arithmetic.
//!
//! Every variant is raised eagerly; callers abort the current command rather
//! than recovering.

use thiserror::Error;

use crate::inventory::{GameProfile, Identity};

/// Malformed local input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Could not parse line: <{0}>")]
    MalformedLine(String),

    #[error("Could not parse ball: <{0}> (must be a prefix of exactly one ball name)")]
    AmbiguousOrUnknownBall(String),

    #[error("Missing species for ball <{0}>")]
    MissingSpecies(String),

    #[error("Could not parse game: <{0}>")]
    UnknownGameProfile(String),

    #[error("Could not parse quantity: <{0}>")]
    InvalidQuantity(String),
}

/// A subtraction that would leave a profile below zero.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error(
    "subtraction would result in negative quantity for game <{profile}> \
     (have {minuend}, tried to subtract {subtrahend})"
)]
pub struct NegativeQuantity {
    pub profile: GameProfile,
    pub minuend: u64,
    pub subtrahend: u64,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollectionError {
    #[error("Cannot subtract collections: entry {identity}: {cause}")]
    NegativeQuantity {
        identity: Identity,
        #[source]
        cause: NegativeQuantity,
    },

    #[error("Cannot subtract collections: entry {0} was not present in the first collection")]
    MissingEntry(Identity),

    #[error("Could not find entry for {0}")]
    NotFound(Identity),
}
