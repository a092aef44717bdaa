//! # Sheet Store Port
//!
//! The operations the sync engine needs from a remote cell grid. Rows are
//! 1-based, columns 0-based. Implementations are expected to make one blocking
//! round trip per call with no retries.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Sheets API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("could not read credentials {}: {source}", path.display())]
    Credentials {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not sign token: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("tab <{0}> not found in spreadsheet")]
    TabNotFound(String),

    #[error("store rejected the operation: {0}")]
    Rejected(String),
}

/// A rectangular block of cells, inclusive on both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellBlock {
    pub first_row: usize,
    pub last_row: usize,
    pub first_col: usize,
    pub last_col: usize,
}

#[async_trait]
pub trait SheetStore: Send + Sync {
    /// Number of rows holding values, header rows included.
    async fn row_count(&self) -> Result<usize, StoreError>;

    /// Every row from `first_row` to the end of the sheet, columns
    /// `0..=last_col`. Trailing empty cells may be missing from a row.
    async fn read_rows(
        &self,
        first_row: usize,
        last_col: usize,
    ) -> Result<Vec<Vec<String>>, StoreError>;

    /// Inserts `count` blank rows so the first one becomes row `at`. New rows
    /// inherit formatting from the row above.
    async fn insert_rows(&self, at: usize, count: usize) -> Result<(), StoreError>;

    /// Deletes rows `first_row..=last_row`.
    async fn delete_rows(&self, first_row: usize, last_row: usize) -> Result<(), StoreError>;

    /// Writes `rows` starting at `first_row`, column 0, in one operation.
    /// Cell text starting with `=` is interpreted as a formula.
    async fn write_rows(&self, first_row: usize, rows: &[Vec<String>]) -> Result<(), StoreError>;

    /// Applies the light-grey bottom/right border style to `block`.
    async fn apply_borders(&self, block: CellBlock) -> Result<(), StoreError>;
}
