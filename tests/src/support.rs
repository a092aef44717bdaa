//! In-memory [`SheetStore`] that behaves like the Sheets API where it matters:
//! trailing empty cells and rows are dropped on read, and any operation can be
//! made to fail.

use std::sync::Mutex;

use async_trait::async_trait;
use onhands_core::codec::{self, HEADER_ROWS};
use onhands_core::store::{CellBlock, SheetStore, StoreError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    RowCount,
    ReadRows,
    InsertRows,
    DeleteRows,
    WriteRows,
    ApplyBorders,
}

#[derive(Default)]
pub struct MemoryStore {
    grid: Mutex<Vec<Vec<String>>>,
    borders: Mutex<Vec<CellBlock>>,
    log: Mutex<Vec<Operation>>,
    fail_on: Mutex<Option<Operation>>,
}

pub fn cells(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn header() -> Vec<Vec<String>> {
    vec![
        cells(&["On-hands"]),
        cells(&["", "", "", "", "", "", "", "", "", "SwSh", "", "SV", "", "BDSP"]),
        cells(&[
            "Ball", "Species", "Icon", "Dex", "Total", "HA", "EM", "Notes", "", "4+IV", "3IV",
            "4+IV", "3IV", "",
        ]),
    ]
}

/// A data row with quantities in the order swsh1, swsh2, sv1, sv2, bdsp.
pub fn data_row(ball: &str, species: &str, quantities: [&str; 5]) -> Vec<String> {
    let mut row = cells(&[ball, species, "x", "x", "x", "x", "x", "x", ""]);
    row.extend(quantities.iter().map(|q| q.to_string()));
    row
}

impl MemoryStore {
    pub fn with_rows(data: Vec<Vec<String>>) -> Self {
        let mut grid = header();
        grid.extend(data);
        Self {
            grid: Mutex::new(grid),
            ..Default::default()
        }
    }

    pub fn fail_on(&self, operation: Operation) {
        *self.fail_on.lock().unwrap() = Some(operation);
    }

    pub fn clear_failure(&self) {
        *self.fail_on.lock().unwrap() = None;
    }

    pub fn grid(&self) -> Vec<Vec<String>> {
        self.grid.lock().unwrap().clone()
    }

    /// Rows holding values, as the API would count them.
    pub fn value_rows(&self) -> usize {
        let grid = self.grid.lock().unwrap();
        grid.iter()
            .rposition(|row| !codec::is_blank(row))
            .map_or(0, |last| last + 1)
    }

    pub fn data_rows(&self) -> Vec<Vec<String>> {
        let rows = self.value_rows();
        self.grid()[HEADER_ROWS.min(rows)..rows].to_vec()
    }

    pub fn borders(&self) -> Vec<CellBlock> {
        self.borders.lock().unwrap().clone()
    }

    pub fn log(&self) -> Vec<Operation> {
        self.log.lock().unwrap().clone()
    }

    fn record(&self, operation: Operation) -> Result<(), StoreError> {
        self.log.lock().unwrap().push(operation);
        if *self.fail_on.lock().unwrap() == Some(operation) {
            return Err(StoreError::Rejected(format!("{operation:?}")));
        }
        Ok(())
    }
}

fn trim_trailing_empty(mut row: Vec<String>) -> Vec<String> {
    while row.last().is_some_and(|cell| cell.is_empty()) {
        row.pop();
    }
    row
}

#[async_trait]
impl SheetStore for MemoryStore {
    async fn row_count(&self) -> Result<usize, StoreError> {
        self.record(Operation::RowCount)?;
        Ok(self.value_rows())
    }

    async fn read_rows(
        &self,
        first_row: usize,
        last_col: usize,
    ) -> Result<Vec<Vec<String>>, StoreError> {
        self.record(Operation::ReadRows)?;
        let rows = self.value_rows();
        let grid = self.grid.lock().unwrap();
        Ok(grid
            .iter()
            .take(rows)
            .skip(first_row - 1)
            .map(|row| trim_trailing_empty(row.iter().take(last_col + 1).cloned().collect()))
            .collect())
    }

    async fn insert_rows(&self, at: usize, count: usize) -> Result<(), StoreError> {
        self.record(Operation::InsertRows)?;
        let mut grid = self.grid.lock().unwrap();
        let index = (at - 1).min(grid.len());
        for _ in 0..count {
            grid.insert(index, Vec::new());
        }
        Ok(())
    }

    async fn delete_rows(&self, first_row: usize, last_row: usize) -> Result<(), StoreError> {
        self.record(Operation::DeleteRows)?;
        let mut grid = self.grid.lock().unwrap();
        let end = last_row.min(grid.len());
        grid.drain(first_row - 1..end);
        Ok(())
    }

    async fn write_rows(&self, first_row: usize, rows: &[Vec<String>]) -> Result<(), StoreError> {
        self.record(Operation::WriteRows)?;
        let mut grid = self.grid.lock().unwrap();
        let needed = first_row - 1 + rows.len();
        if grid.len() < needed {
            grid.resize(needed, Vec::new());
        }
        for (offset, row) in rows.iter().enumerate() {
            grid[first_row - 1 + offset] = row.clone();
        }
        Ok(())
    }

    async fn apply_borders(&self, block: CellBlock) -> Result<(), StoreError> {
        self.record(Operation::ApplyBorders)?;
        self.borders.lock().unwrap().push(block);
        Ok(())
    }
}
