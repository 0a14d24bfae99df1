use crate::dataset::Dataset;
use crate::ingest::error::{IngestError, SourceError};
use crate::ingest::merge::merge;
use crate::ingest::source::{SourceEntries, SourceInput, ingest_content};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Knobs for one ingestion run.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Upper bound on sources read and parsed at the same time.
    pub max_concurrent_sources: usize,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            max_concurrent_sources: default_concurrency(),
        }
    }
}

pub fn default_concurrency() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Ingests all sources concurrently and merges them into one dataset.
///
/// Each source runs as its own task. A source that cannot be read or whose
/// task fails is logged and contributes nothing; the other sources are not
/// affected. Merging waits for every task and consumes the results in input
/// order.
pub async fn ingest(
    sources: Vec<SourceInput>,
    options: &IngestOptions,
) -> Result<Dataset, IngestError> {
    let total = sources.len();
    let permits = Arc::new(Semaphore::new(options.max_concurrent_sources.max(1)));
    let mut tasks = JoinSet::new();

    for (position, source) in sources.into_iter().enumerate() {
        let permits = Arc::clone(&permits);
        tasks.spawn(async move {
            let id = source.id().to_string();
            let loaded = match permits.acquire_owned().await {
                Ok(_permit) => load_source(source).await,
                Err(e) => Err(SourceError::Task {
                    id: id.clone(),
                    reason: e.to_string(),
                }),
            };
            (position, id, loaded)
        });
    }

    let mut slots: Vec<Option<SourceEntries>> = (0..total).map(|_| None).collect();

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((position, _, Ok(entries))) => slots[position] = Some(entries),
            Ok((position, id, Err(err))) => {
                tracing::warn!(source = %id, error = %err, "skipping unreadable source");
                slots[position] = Some(SourceEntries::empty(id));
            }
            Err(err) => {
                tracing::warn!(error = %err, "source task failed; skipping");
            }
        }
    }

    merge(slots.into_iter().flatten().collect())
}

/// Blocking wrapper around [`ingest`] for callers without a runtime.
///
/// Must not be called from within an async context.
pub fn ingest_blocking(
    sources: Vec<SourceInput>,
    options: &IngestOptions,
) -> Result<Dataset, IngestError> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(options.max_concurrent_sources.clamp(1, 16))
        .enable_all()
        .build()
        .map_err(|e| IngestError::fatal(format!("failed to build ingestion runtime: {e}")))?;

    runtime.block_on(ingest(sources, options))
}

async fn load_source(source: SourceInput) -> Result<SourceEntries, SourceError> {
    let (id, content) = match source {
        SourceInput::Inline { id, content } => (id, content),
        SourceInput::File { id, path } => {
            let bytes = tokio::fs::read(&path)
                .await
                .map_err(|e| SourceError::read(&id, &path, e))?;
            (id, decode_lossy(bytes))
        }
    };

    let task_id = id.clone();
    tokio::task::spawn_blocking(move || ingest_content(id, &content))
        .await
        .map_err(|e| SourceError::Task {
            id: task_id,
            reason: e.to_string(),
        })
}

/// Invalid UTF-8 is replaced rather than failing the whole source.
fn decode_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}
