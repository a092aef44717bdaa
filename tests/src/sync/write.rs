use onhands_common::inventory::{Ball, Collection, GameProfile, Identity, QuantityVector};
use onhands_core::codec::{FIRST_QUANTITY_COL, HEADER_ROWS, LAST_COL};
use onhands_core::store::CellBlock;
use onhands_core::sync::{SyncEngine, SyncError, WriteSummary};

use crate::support::{MemoryStore, Operation, data_row, header};

/// `n` distinct entries, each with one Sv1 on-hand.
fn collection_of(n: usize) -> Collection {
    (0..n)
        .map(|i| {
            (
                Identity::new(Ball::Beast, &format!("species{i:02}")),
                QuantityVector::single(GameProfile::Sv1, 1),
            )
        })
        .collect()
}

fn store_with_data_rows(n: usize) -> MemoryStore {
    MemoryStore::with_rows(
        (0..n)
            .map(|i| data_row("Moon", &format!("Old{i:02}"), ["1", "", "", "", ""]))
            .collect(),
    )
}

#[tokio::test]
async fn write_shrinks_sheet_to_collection_size() {
    let engine = SyncEngine::new(store_with_data_rows(10));

    let summary = engine.write(&collection_of(3)).await.unwrap();

    assert_eq!(
        summary,
        WriteSummary {
            rows_before: HEADER_ROWS + 10,
            rows_after: HEADER_ROWS + 3,
            entries: 3
        }
    );
    assert_eq!(engine.store().value_rows(), HEADER_ROWS + 3);
    assert_eq!(engine.store().grid().len(), HEADER_ROWS + 3);
    assert_eq!(engine.read().await.unwrap(), collection_of(3));
}

#[tokio::test]
async fn write_grows_sheet_to_collection_size() {
    let engine = SyncEngine::new(store_with_data_rows(2));

    engine.write(&collection_of(7)).await.unwrap();

    assert_eq!(engine.store().value_rows(), HEADER_ROWS + 7);
    assert_eq!(engine.read().await.unwrap(), collection_of(7));
}

#[tokio::test]
async fn write_resizes_before_writing_values() {
    let grow = SyncEngine::new(store_with_data_rows(1));
    grow.write(&collection_of(4)).await.unwrap();
    assert_eq!(
        grow.store().log(),
        vec![
            Operation::RowCount,
            Operation::InsertRows,
            Operation::WriteRows,
            Operation::ApplyBorders
        ]
    );

    let shrink = SyncEngine::new(store_with_data_rows(4));
    shrink.write(&collection_of(1)).await.unwrap();
    assert_eq!(
        shrink.store().log(),
        vec![
            Operation::RowCount,
            Operation::DeleteRows,
            Operation::WriteRows,
            Operation::ApplyBorders
        ]
    );

    let same = SyncEngine::new(store_with_data_rows(2));
    same.write(&collection_of(2)).await.unwrap();
    assert_eq!(
        same.store().log(),
        vec![
            Operation::RowCount,
            Operation::WriteRows,
            Operation::ApplyBorders
        ]
    );
}

#[tokio::test]
async fn write_leaves_header_untouched_and_sorts_rows() {
    let engine = SyncEngine::new(store_with_data_rows(0));
    let collection: Collection = [
        (Identity::new(Ball::Sport, "scyther"), QuantityVector::single(GameProfile::Bdsp, 2)),
        (Identity::new(Ball::Beast, "togepi"), QuantityVector::single(GameProfile::Swsh1, 1)),
        (Identity::new(Ball::Dream, "abra"), QuantityVector::single(GameProfile::Sv2, 5)),
    ]
    .into_iter()
    .collect();

    engine.write(&collection).await.unwrap();

    let grid = engine.store().grid();
    assert_eq!(&grid[..HEADER_ROWS], &header()[..]);

    let data = engine.store().data_rows();
    let order: Vec<&str> = data.iter().map(|row| row[1].as_str()).collect();
    assert_eq!(order, vec!["Togepi", "Abra", "Scyther"]);
    assert_eq!(data[0][2], "=VLOOKUP(A4, Backend!$AD$4:$AE$20, 2)");
    assert_eq!(data[2][4], "=SUM($J6:$N6)");
    assert_eq!(data[1][FIRST_QUANTITY_COL + 3], "5");
    assert_eq!(data[1][FIRST_QUANTITY_COL], "");
}

#[tokio::test]
async fn write_prunes_zero_entries() {
    let engine = SyncEngine::new(store_with_data_rows(3));
    let mut collection = collection_of(2);
    collection.insert_or_merge(Identity::new(Ball::Heavy, "larvitar"), QuantityVector::zero());

    let summary = engine.write(&collection).await.unwrap();

    assert_eq!(summary.entries, 2);
    assert_eq!(engine.store().value_rows(), HEADER_ROWS + 2);
}

#[tokio::test]
async fn write_refreshes_quantity_borders() {
    let engine = SyncEngine::new(store_with_data_rows(0));

    engine.write(&collection_of(5)).await.unwrap();

    assert_eq!(
        engine.store().borders(),
        vec![CellBlock {
            first_row: HEADER_ROWS + 1,
            last_row: HEADER_ROWS + 5,
            first_col: FIRST_QUANTITY_COL,
            last_col: LAST_COL,
        }]
    );
}

#[tokio::test]
async fn write_of_empty_collection_clears_data_rows() {
    let engine = SyncEngine::new(store_with_data_rows(4));

    let summary = engine.write(&Collection::empty()).await.unwrap();

    assert_eq!(summary.rows_after, HEADER_ROWS);
    assert_eq!(engine.store().grid(), header());
    assert!(!engine.store().log().contains(&Operation::WriteRows));
    assert!(engine.store().borders().is_empty());
}

#[tokio::test]
async fn interrupted_write_leaves_resized_sheet_with_stale_values() {
    let store = store_with_data_rows(2);
    store.fail_on(Operation::WriteRows);
    let engine = SyncEngine::new(store);

    let result = engine.write(&collection_of(4)).await;
    assert!(matches!(result, Err(SyncError::Store(_))));

    // Rows were appended but never filled in.
    assert_eq!(engine.store().grid().len(), HEADER_ROWS + 4);
    assert_eq!(engine.store().value_rows(), HEADER_ROWS + 2);
    let stale = engine.read().await.unwrap();
    assert_eq!(stale.len(), 2);

    // A retry converges.
    engine.store().clear_failure();
    engine.write(&collection_of(4)).await.unwrap();
    assert_eq!(engine.store().value_rows(), HEADER_ROWS + 4);
    assert_eq!(engine.read().await.unwrap(), collection_of(4));
}

#[tokio::test]
async fn failed_border_refresh_keeps_written_values() {
    let store = store_with_data_rows(1);
    store.fail_on(Operation::ApplyBorders);
    let engine = SyncEngine::new(store);

    assert!(engine.write(&collection_of(3)).await.is_err());

    assert!(engine.store().borders().is_empty());
    engine.store().clear_failure();
    assert_eq!(engine.read().await.unwrap(), collection_of(3));
}
