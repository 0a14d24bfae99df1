use crate::entry::LogEntry;
use std::collections::{BTreeMap, BTreeSet};

/// The merged, timestamp-ascending entries of one ingestion.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    name: String,
    version: u64,
    sources: Vec<String>,
    entries: Vec<LogEntry>,
}

/// First and last timestamp of a dataset, in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: i64,
    pub end: i64,
}

impl Span {
    pub fn duration_ms(&self) -> i64 {
        self.end - self.start
    }
}

impl Dataset {
    /// `entries` must already be sorted by timestamp.
    pub(crate) fn new(name: String, sources: Vec<String>, entries: Vec<LogEntry>) -> Self {
        debug_assert!(
            entries
                .windows(2)
                .all(|w| w[0].timestamp_ms() <= w[1].timestamp_ms())
        );

        Self {
            name,
            version: 0,
            sources,
            entries,
        }
    }

    pub(crate) fn with_version(mut self, version: u64) -> Self {
        self.version = version;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identifies this dataset among those published by one store.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Ids of the sources that contributed entries, in input order.
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn span(&self) -> Option<Span> {
        let first = self.entries.first()?;
        let last = self.entries.last()?;

        Some(Span {
            start: first.timestamp_ms(),
            end: last.timestamp_ms(),
        })
    }

    /// Distinct components, sorted. Always computed over all entries so
    /// that narrowing one filter never hides a choice in another.
    pub fn unique_components(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(LogEntry::component)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct trace levels, sorted.
    pub fn unique_levels(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(LogEntry::trace_level)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn level_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.trace_level()).or_insert(0) += 1;
        }
        counts
    }
}
