use crate::entry::LogEntry;
use crate::ingest::parse::parse_line;
use std::path::{Path, PathBuf};

/// One raw input to an ingestion.
#[derive(Debug, Clone)]
pub enum SourceInput {
    /// Content already in memory, e.g. an uploaded file.
    Inline { id: String, content: String },

    /// A file read during ingestion.
    File { id: String, path: PathBuf },
}

impl SourceInput {
    pub fn inline(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Inline {
            id: id.into(),
            content: content.into(),
        }
    }

    /// File source identified by its file name.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::File {
            id: source_id(&path),
            path,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Inline { id, .. } | Self::File { id, .. } => id,
        }
    }
}

/// The accepted entries of one source, in source order.
#[derive(Debug, Clone, Default)]
pub struct SourceEntries {
    pub id: String,
    pub entries: Vec<LogEntry>,
    pub rejected_lines: usize,
}

impl SourceEntries {
    /// A source that contributed nothing, e.g. because it could not be read.
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// Runs every line of `content` through the record parser.
///
/// Blank lines are skipped without being counted as rejected.
pub fn ingest_content(id: impl Into<String>, content: &str) -> SourceEntries {
    let id = id.into();
    let mut entries = Vec::new();
    let mut rejected_lines = 0;

    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(entry) => entries.push(entry),
            None => rejected_lines += 1,
        }
    }

    tracing::debug!(
        source = %id,
        accepted = entries.len(),
        rejected = rejected_lines,
        "source parsed"
    );

    SourceEntries {
        id,
        entries,
        rejected_lines,
    }
}

fn source_id(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
