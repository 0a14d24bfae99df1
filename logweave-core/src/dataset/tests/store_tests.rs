use crate::dataset::DatasetStore;
use crate::ingest::{IngestError, IngestOptions, SourceInput};
use pretty_assertions::assert_eq;

const RECORD: &str =
    r#"{"eventTimestamp":"2024-03-01T09:00:00Z","component":"Robot","traceLevel":"Info"}"#;

fn store() -> DatasetStore {
    DatasetStore::new(IngestOptions {
        max_concurrent_sources: 2,
    })
}

#[tokio::test]
async fn ingest_publishes_new_versions() {
    // Arrange
    let store = store();
    assert!(store.snapshot().is_none());

    // Act
    let first = store
        .ingest(vec![SourceInput::inline("a.log", RECORD)])
        .await
        .unwrap();
    let second = store
        .ingest(vec![SourceInput::inline("b.log", RECORD)])
        .await
        .unwrap();

    // Assert
    assert!(second.version() > first.version());
    assert_eq!(store.snapshot().unwrap().name(), "b.log");
    // Earlier snapshots stay valid after replacement.
    assert_eq!(first.name(), "a.log");
}

#[tokio::test]
async fn empty_ingestion_keeps_previous_dataset() {
    let store = store();
    store
        .ingest(vec![SourceInput::inline("a.log", RECORD)])
        .await
        .unwrap();

    let result = store
        .ingest(vec![SourceInput::inline("junk.log", "junk")])
        .await;

    assert!(matches!(result, Err(IngestError::EmptyDataset)));
    assert_eq!(store.snapshot().unwrap().name(), "a.log");
}

#[tokio::test]
async fn reset_discards_dataset() {
    let store = store();
    store
        .ingest(vec![SourceInput::inline("a.log", RECORD)])
        .await
        .unwrap();

    store.reset();

    assert!(store.snapshot().is_none());
}
