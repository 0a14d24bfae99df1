use std::path::PathBuf;
use thiserror::Error;

/// Whole-batch ingestion outcomes that reach the caller.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("no valid records found")]
    EmptyDataset,

    #[error("ingestion failed: {reason}")]
    Fatal { reason: String },
}

impl IngestError {
    pub fn fatal(reason: impl Into<String>) -> Self {
        Self::Fatal {
            reason: reason.into(),
        }
    }
}

/// Failure of a single source. These are logged and absorbed; the source
/// then contributes no entries.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read source '{id}' from {path}: {source}")]
    Read {
        id: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("source '{id}' could not be processed: {reason}")]
    Task { id: String, reason: String },
}

impl SourceError {
    pub fn read(id: impl Into<String>, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            id: id.into(),
            path: path.into(),
            source,
        }
    }
}
