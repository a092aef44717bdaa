//! # Sheet Codec
//!
//! Fixed column layout of the on-hands tab (0-indexed):
//!
//! | cols   | content                                           |
//! |--------|---------------------------------------------------|
//! | 0      | ball                                              |
//! | 1      | species                                           |
//! | 2..=7  | spreadsheet-side formulas (never computed here)   |
//! | 8      | blank                                             |
//! | 9..=13 | quantity per [`GameProfile`], in declared order   |
//!
//! The first [`HEADER_ROWS`] rows are headers and are never touched.

use thiserror::Error;

use onhands_common::error::ParseError;
use onhands_common::inventory::{GameProfile, Identity, QuantityVector};

pub const HEADER_ROWS: usize = 3;
pub const BALL_COL: usize = 0;
pub const SPECIES_COL: usize = 1;
pub const FIRST_QUANTITY_COL: usize = 9;
pub const LAST_COL: usize = FIRST_QUANTITY_COL + GameProfile::COUNT - 1;
pub const ROW_WIDTH: usize = LAST_COL + 1;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Could not parse quantity in column {column}: <{value}>")]
    CellParseError { column: usize, value: String },

    #[error(transparent)]
    Identity(#[from] ParseError),
}

/// Column holding `profile`'s count.
pub fn quantity_col(profile: GameProfile) -> usize {
    FIRST_QUANTITY_COL + profile.index()
}

/// A1 column letter. The layout never goes past `Z`.
pub fn column_letter(col: usize) -> char {
    debug_assert!(col < 26);
    (b'A' + col as u8) as char
}

/// True when every cell is empty (or the row has no cells at all).
pub fn is_blank(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}

/// Decodes one data row.
///
/// The remote API drops trailing empty cells, so short rows are padded. An
/// empty quantity cell counts as 0.
pub fn decode(row: &[String]) -> Result<(Identity, QuantityVector), CodecError> {
    let mut row = row.to_vec();
    if row.len() < ROW_WIDTH {
        row.resize(ROW_WIDTH, String::new());
    }

    let identity = Identity::parse(row[BALL_COL].trim(), &row[SPECIES_COL])?;

    let mut pairs = Vec::with_capacity(GameProfile::COUNT);
    for profile in GameProfile::ALL {
        let column = quantity_col(profile);
        let cell = row[column].trim();
        if cell.is_empty() {
            continue;
        }
        let count = cell.parse::<u64>().map_err(|_| CodecError::CellParseError {
            column,
            value: cell.to_string(),
        })?;
        pairs.push((profile, count));
    }

    Ok((identity, QuantityVector::from_pairs(pairs)))
}

/// Encodes one entry as the row that sits at sheet row `row_index` (1-based).
pub fn encode(identity: &Identity, vector: &QuantityVector, row_index: usize) -> Vec<String> {
    let mut row = vec![String::new(); ROW_WIDTH];
    row[BALL_COL] = identity.ball().name().to_string();
    row[SPECIES_COL] = identity.species().to_string();

    for (offset, formula) in formulas(row_index).into_iter().enumerate() {
        row[SPECIES_COL + 1 + offset] = formula;
    }

    for (profile, count) in vector.iter() {
        row[quantity_col(profile)] = if count == 0 {
            String::new()
        } else {
            count.to_string()
        };
    }
    row
}

/// Formula templates for columns C..=H. They only depend on the row number.
fn formulas(r: usize) -> [String; 6] {
    [
        format!("=VLOOKUP(A{r}, Backend!$AD$4:$AE$20, 2)"),
        format!("=VLOOKUP(B{r}, Backend!$A$4:$V, Backend!$C$2)"),
        format!("=SUM($J{r}:$N{r})"),
        format!("=VLOOKUP($B{r}, Backend!$A$4:$V, Backend!S$2)"),
        format!("=VLOOKUP($B{r}, Backend!$A$4:$V, Backend!U$2)"),
        format!("=VLOOKUP($B{r}, Backend!$A$4:$V, Backend!V$2)"),
    ]
}
