//! Ingestion pipeline
//!
//! Raw sources go through three stages:
//!
//! source text
//! parse_line (per line, rejects silently)
//! ingest_content (per source)
//! merge (all sources, one timeline)
//! Dataset
//!
//! Sources are independent of each other and are read and parsed
//! concurrently by [`ingest`]. The merge step waits for every source and is
//! deterministic regardless of which source finished first.

mod error;
mod merge;
mod parse;
mod runner;
mod source;
#[cfg(test)]
mod tests;

pub use error::*;
pub use merge::{dataset_name, merge};
pub use parse::parse_line;
pub use runner::{IngestOptions, default_concurrency, ingest, ingest_blocking};
pub use source::{SourceEntries, SourceInput, ingest_content};
