use crate::ingest::{IngestOptions, default_concurrency};
use crate::query::{DEFAULT_METRIC_CAP, DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};

/// Represents the top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LogweaveConfig {
    #[serde(default)]
    pub engine: EngineConfig,

    #[serde(default)]
    pub sources: SourcesConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Entries per page of query results.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Upper bound on downsampled metric points.
    #[serde(default = "default_metric_cap")]
    pub metric_cap: usize,

    /// Sources read and parsed at the same time.
    #[serde(default = "default_concurrency")]
    pub max_concurrent_sources: usize,
}

/// Glob patterns of log files, relative to the config file's directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourcesConfig {
    #[serde(default)]
    pub include: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            metric_cap: default_metric_cap(),
            max_concurrent_sources: default_concurrency(),
        }
    }
}

impl EngineConfig {
    pub fn ingest_options(&self) -> IngestOptions {
        IngestOptions {
            max_concurrent_sources: self.max_concurrent_sources,
        }
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_metric_cap() -> usize {
    DEFAULT_METRIC_CAP
}
