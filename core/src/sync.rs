//! # Sync Engine
//!
//! Reads the whole sheet into a [`Collection`] and writes a collection back.
//!
//! A write is several remote calls in sequence:
//!
//! 1. read the current row count;
//! 2. grow or shrink the sheet to `HEADER_ROWS + entries`;
//! 3. write every data row in one range operation;
//! 4. refresh the borders of the quantity block.
//!
//! It is **not** transactional. A failure after step 2 leaves the sheet with a
//! row count that does not match its contents (blank or stale rows), and a
//! failure in step 4 leaves values written without refreshed borders. Nothing
//! guards against another writer editing the sheet between a read and a write.

use thiserror::Error;
use tracing::{debug, info, warn};

use onhands_common::error::CollectionError;
use onhands_common::inventory::Collection;

use crate::codec::{self, CodecError, FIRST_QUANTITY_COL, HEADER_ROWS, LAST_COL};
use crate::store::{CellBlock, SheetStore, StoreError};

#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("row {row}: {source}")]
    Decode {
        row: usize,
        #[source]
        source: CodecError,
    },

    #[error(transparent)]
    Collection(#[from] CollectionError),
}

/// What a write did to the sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WriteSummary {
    pub rows_before: usize,
    pub rows_after: usize,
    pub entries: usize,
}

/// Drives one [`SheetStore`]. The store handle is owned by the engine rather
/// than shared, so one engine is one session against one sheet.
pub struct SyncEngine<S> {
    store: S,
}

impl<S: SheetStore> SyncEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Decodes every data row below the header into a collection.
    ///
    /// Several rows for the same identity are summed. Fully blank rows, which
    /// an interrupted write can leave behind, are skipped.
    pub async fn read(&self) -> Result<Collection, SyncError> {
        info!("Reading in spreadsheet...");
        let first_row = HEADER_ROWS + 1;
        let rows = self.store.read_rows(first_row, LAST_COL).await?;

        let mut collection = Collection::empty();
        for (offset, row) in rows.iter().enumerate() {
            let row_number = first_row + offset;
            if codec::is_blank(row) {
                warn!("Skipping blank row {row_number}");
                continue;
            }

            let (identity, vector) = codec::decode(row).map_err(|source| SyncError::Decode {
                row: row_number,
                source,
            })?;

            if collection.lookup(&identity).is_ok() {
                // Summed to match insert-or-merge, but most likely a typo on the sheet.
                warn!("Duplicate row {row_number} for {identity}; quantities are summed");
            }
            collection.insert_or_merge(identity, vector);
        }

        debug!("decoded {} rows into {} entries", rows.len(), collection.len());
        Ok(collection)
    }

    /// Replaces the sheet's data rows with `collection`.
    ///
    /// Zero entries are pruned first, so the sheet ends up with exactly
    /// `HEADER_ROWS + collection.prune().len()` rows.
    pub async fn write(&self, collection: &Collection) -> Result<WriteSummary, SyncError> {
        let entries = collection.clone().prune();

        let rows_before = self.store.row_count().await?;
        let rows_after = HEADER_ROWS + entries.len();

        // Row count must be settled before the value write.
        info!("Updating number of rows in spreadsheet...");
        if rows_after > rows_before {
            debug!("inserting {} rows", rows_after - rows_before);
            self.store
                .insert_rows(rows_before + 1, rows_after - rows_before)
                .await?;
        } else if rows_after < rows_before {
            debug!("deleting rows {}..={}", rows_after + 1, rows_before);
            self.store.delete_rows(rows_after + 1, rows_before).await?;
        }

        let rows = encode_rows(&entries);
        if rows.is_empty() {
            info!("Sheet is now empty.");
        } else {
            info!("Updating spreadsheet values...");
            self.store.write_rows(HEADER_ROWS + 1, &rows).await?;

            info!("Updating spreadsheet borders...");
            self.store
                .apply_borders(CellBlock {
                    first_row: HEADER_ROWS + 1,
                    last_row: rows_after,
                    first_col: FIRST_QUANTITY_COL,
                    last_col: LAST_COL,
                })
                .await?;
        }

        info!("Done.");
        Ok(WriteSummary {
            rows_before,
            rows_after,
            entries: entries.len(),
        })
    }

    /// Reads the sheet, adds `delta` and writes the sum back.
    pub async fn add(&self, delta: &Collection) -> Result<WriteSummary, SyncError> {
        let current = self.read().await?;
        self.write(&current.merge(delta)).await
    }

    /// Reads the sheet, removes `delta` and writes the rest back.
    ///
    /// The subtraction is checked in full before anything is written.
    pub async fn remove(&self, delta: &Collection) -> Result<WriteSummary, SyncError> {
        let current = self.read().await?;
        let remaining = current.difference(delta)?;
        self.write(&remaining).await
    }
}

/// Encodes `collection` in identity order, one row per entry, numbered from
/// the first row after the header.
pub fn encode_rows(collection: &Collection) -> Vec<Vec<String>> {
    collection
        .iter()
        .enumerate()
        .map(|(i, (identity, vector))| codec::encode(identity, vector, HEADER_ROWS + 1 + i))
        .collect()
}
