use onhands_common::error::ParseError;
use onhands_common::inventory::{Ball, GameProfile, Identity, QuantityVector};
use onhands_core::codec::CodecError;
use onhands_core::sync::{SyncEngine, SyncError};

use crate::support::{MemoryStore, Operation, cells, data_row};

#[tokio::test]
async fn read_decodes_every_data_row() {
    let store = MemoryStore::with_rows(vec![
        data_row("Beast", "Togepi", ["2", "", "", "", ""]),
        data_row("Moon", "Clefairy", ["", "1", "", "", "4"]),
        cells(&["Dream", "Abra"]),
    ]);
    let engine = SyncEngine::new(store);

    let collection = engine.read().await.expect("read failed");

    assert_eq!(collection.len(), 3);
    assert_eq!(
        collection.lookup(&Identity::new(Ball::Moon, "clefairy")),
        Ok(&QuantityVector::from_pairs([
            (GameProfile::Swsh2, 1),
            (GameProfile::Bdsp, 4)
        ]))
    );
    assert!(
        collection
            .lookup(&Identity::new(Ball::Dream, "abra"))
            .is_ok_and(|v| v.is_zero())
    );
}

#[tokio::test]
async fn read_sums_duplicate_rows() {
    let store = MemoryStore::with_rows(vec![
        data_row("Beast", "Togepi", ["2", "", "", "", ""]),
        data_row("Beast", "togepi", ["1", "", "3", "", ""]),
    ]);
    let engine = SyncEngine::new(store);

    let collection = engine.read().await.unwrap();

    assert_eq!(collection.len(), 1);
    assert_eq!(
        collection.lookup(&Identity::new(Ball::Beast, "Togepi")),
        Ok(&QuantityVector::from_pairs([
            (GameProfile::Swsh1, 3),
            (GameProfile::Sv1, 3)
        ]))
    );
}

#[tokio::test]
async fn read_skips_blank_rows() {
    let store = MemoryStore::with_rows(vec![
        data_row("Beast", "Togepi", ["2", "", "", "", ""]),
        Vec::new(),
        cells(&["", "", ""]),
        data_row("Sport", "Scyther", ["", "", "", "", "1"]),
    ]);
    let engine = SyncEngine::new(store);

    let collection = engine.read().await.unwrap();

    assert_eq!(collection.len(), 2);
}

#[tokio::test]
async fn read_reports_the_offending_row() {
    let store = MemoryStore::with_rows(vec![
        data_row("Beast", "Togepi", ["2", "", "", "", ""]),
        data_row("Beast", "Abra", ["", "", "two", "", ""]),
    ]);
    let engine = SyncEngine::new(store);

    match engine.read().await {
        Err(SyncError::Decode { row, source }) => {
            assert_eq!(row, 5);
            assert_eq!(
                source,
                CodecError::CellParseError {
                    column: 11,
                    value: "two".to_string()
                }
            );
        }
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn read_of_header_only_sheet_is_empty() {
    let engine = SyncEngine::new(MemoryStore::with_rows(Vec::new()));
    let collection = engine.read().await.unwrap();
    assert!(collection.is_empty());
    assert_eq!(engine.store().log(), vec![Operation::ReadRows]);
}

#[tokio::test]
async fn read_propagates_store_failure() {
    let store = MemoryStore::with_rows(Vec::new());
    store.fail_on(Operation::ReadRows);
    let engine = SyncEngine::new(store);

    assert!(matches!(engine.read().await, Err(SyncError::Store(_))));
}

#[tokio::test]
async fn read_rejects_row_without_species() {
    let store = MemoryStore::with_rows(vec![
        data_row("Beast", "Togepi", ["2", "", "", "", ""]),
        data_row("Beast", "", ["1", "", "", "", ""]),
    ]);
    let engine = SyncEngine::new(store);

    match engine.read().await {
        Err(SyncError::Decode {
            row,
            source: CodecError::Identity(ParseError::MissingSpecies(_)),
        }) => assert_eq!(row, 5),
        other => panic!("unexpected result: {other:?}"),
    }
}
