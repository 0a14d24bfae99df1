use crate::dataset::Dataset;
use crate::entry::LogEntry;
use crate::ingest::error::IngestError;
use crate::ingest::source::SourceEntries;

/// Combines the results of all sources of one ingestion into a dataset.
///
/// Sources without entries are dropped. The remaining entries are sorted
/// by timestamp with a stable sort, so for a fixed input order the result
/// is fully deterministic. Callers pass sources in input order, never in
/// completion order.
pub fn merge(results: Vec<SourceEntries>) -> Result<Dataset, IngestError> {
    let provided = results.len();
    let mut sources = Vec::new();
    let mut entries: Vec<LogEntry> = Vec::new();

    for result in results {
        if result.entries.is_empty() {
            tracing::debug!(source = %result.id, "source did not match the schema");
            continue;
        }
        sources.push(result.id);
        entries.extend(result.entries);
    }

    if entries.is_empty() {
        tracing::warn!(sources = provided, "no valid records found");
        return Err(IngestError::EmptyDataset);
    }

    entries.sort_by_key(LogEntry::timestamp_ms);

    let name = dataset_name(&sources);
    tracing::info!(
        dataset = %name,
        sources = provided,
        contributing = sources.len(),
        entries = entries.len(),
        "dataset merged"
    );

    Ok(Dataset::new(name, sources, entries))
}

/// The single contributing source's id, or `"<N> Log Files Merged"`.
pub fn dataset_name(contributing: &[String]) -> String {
    match contributing {
        [only] => only.clone(),
        _ => format!("{} Log Files Merged", contributing.len()),
    }
}
