//! # Inventory Line Grammars
//!
//! * **tagged**: `<game-tag> <ball-prefix> <species> [quantity]`
//! * **untagged**: `<ball-prefix> <species> [quantity]`, with the game supplied
//!   separately (e.g. from `--game`).
//! * **identity**: `<ball-prefix> <species>`, used for lookups.
//!
//! A missing quantity means 1.

use crate::error::ParseError;
use crate::inventory::{Collection, GameProfile, Identity, QuantityVector};

/// Parses one inventory line.
///
/// With `game == None` the line must start with a game tag.
pub fn parse_line(
    line: &str,
    game: Option<GameProfile>,
) -> Result<(Identity, QuantityVector), ParseError> {
    match game {
        Some(game) => parse_untagged_line(line, game),
        None => parse_tagged_line(line),
    }
}

pub fn parse_tagged_line(line: &str) -> Result<(Identity, QuantityVector), ParseError> {
    let Some((tag, rest)) = line.trim().split_once(char::is_whitespace) else {
        return Err(ParseError::MalformedLine(line.to_string()));
    };
    let game = GameProfile::parse_tag(tag)?;
    parse_untagged_line(rest, game)
}

pub fn parse_untagged_line(
    line: &str,
    game: GameProfile,
) -> Result<(Identity, QuantityVector), ParseError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let (ball, species, quantity) = match words.as_slice() {
        [ball, species] => (*ball, *species, 1),
        [ball, species, quantity] => (*ball, *species, parse_quantity(quantity)?),
        _ => return Err(ParseError::MalformedLine(line.to_string())),
    };

    let identity = Identity::parse(ball, species)?;
    Ok((identity, QuantityVector::single(game, quantity)))
}

pub fn parse_identity_line(line: &str) -> Result<Identity, ParseError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        [ball, species] => Identity::parse(ball, species),
        _ => Err(ParseError::MalformedLine(line.to_string())),
    }
}

/// A single line carries at most `u32::MAX`; only stored totals go wider.
fn parse_quantity(s: &str) -> Result<u64, ParseError> {
    s.parse::<u32>()
        .map(u64::from)
        .map_err(|_| ParseError::InvalidQuantity(s.to_string()))
}

/// Builds a collection from a batch of lines, summing repeated identities.
///
/// Blank lines are skipped. The whole batch is validated before anything is
/// returned, so a bad line anywhere rejects the batch.
pub fn collection_from_lines<I, S>(
    lines: I,
    game: Option<GameProfile>,
) -> Result<Collection, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut collection = Collection::empty();
    for line in lines {
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }
        let (identity, vector) = parse_line(line, game)?;
        collection.insert_or_merge(identity, vector);
    }
    Ok(collection)
}

/// Parses identity lines, skipping blanks.
pub fn identities_from_lines<I, S>(lines: I) -> Result<Vec<Identity>, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter(|line| !line.as_ref().trim().is_empty())
        .map(|line| parse_identity_line(line.as_ref()))
        .collect()
}
