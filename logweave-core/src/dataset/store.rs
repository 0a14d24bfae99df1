use crate::dataset::Dataset;
use crate::ingest::{IngestError, IngestOptions, SourceInput, ingest};
use arc_swap::ArcSwapOption;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;

/// Holds the current dataset.
///
/// Readers take an `Arc` snapshot and query it without coordination. An
/// ingestion builds the next dataset off to the side and swaps it in as a
/// whole; only one ingestion runs at a time.
pub struct DatasetStore {
    current: ArcSwapOption<Dataset>,
    ingest_lock: Mutex<()>,
    next_version: AtomicU64,
    options: IngestOptions,
}

impl DatasetStore {
    pub fn new(options: IngestOptions) -> Self {
        Self {
            current: ArcSwapOption::empty(),
            ingest_lock: Mutex::new(()),
            next_version: AtomicU64::new(1),
            options,
        }
    }

    pub fn snapshot(&self) -> Option<Arc<Dataset>> {
        self.current.load_full()
    }

    /// Replaces the current dataset with one built from `sources`.
    ///
    /// On error the current dataset is left as it was.
    pub async fn ingest(&self, sources: Vec<SourceInput>) -> Result<Arc<Dataset>, IngestError> {
        let _guard = self.ingest_lock.lock().await;

        let dataset = ingest(sources, &self.options).await?;
        let version = self.next_version.fetch_add(1, Ordering::Relaxed);
        let dataset = Arc::new(dataset.with_version(version));

        let previous = self.current.swap(Some(Arc::clone(&dataset)));
        tracing::info!(
            dataset = %dataset.name(),
            version,
            entries = dataset.len(),
            replaced = ?previous.map(|p| p.version()),
            "dataset published"
        );

        Ok(dataset)
    }

    /// Discards the current dataset.
    pub fn reset(&self) {
        if let Some(previous) = self.current.swap(None) {
            tracing::info!(
                dataset = %previous.name(),
                version = previous.version(),
                "dataset discarded"
            );
        }
    }
}

impl Default for DatasetStore {
    fn default() -> Self {
        Self::new(IngestOptions::default())
    }
}
