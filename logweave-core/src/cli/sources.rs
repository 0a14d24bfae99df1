use crate::conf::{ConfigError, LoadedConfig, discover, load_config_or_default};
use crate::dataset::Dataset;
use crate::entry::parse_timestamp;
use crate::ingest::{SourceInput, ingest_blocking};
use anyhow::{Context, Result, bail};
use clap::Args;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Log files or glob patterns. Defaults to `sources.include` from the config.
    pub paths: Vec<String>,
}

/// Loads the config, resolves the sources and ingests them.
pub fn load_dataset(
    config_path: Option<&Path>,
    args: &SourceArgs,
) -> Result<(LoadedConfig, Dataset)> {
    let loaded = load_config_or_default(config_path)?;
    let files = resolve_sources(&loaded, &args.paths)?;
    tracing::debug!(files = files.len(), "sources resolved");

    let sources = files.into_iter().map(SourceInput::file).collect();
    let dataset = ingest_blocking(sources, &loaded.config.engine.ingest_options())
        .context("failed to load logs")?;

    Ok((loaded, dataset))
}

/// Command-line paths resolve against the working directory and replace
/// the configured patterns entirely.
fn resolve_sources(loaded: &LoadedConfig, paths: &[String]) -> Result<Vec<PathBuf>, ConfigError> {
    let (root, patterns) = if paths.is_empty() {
        (loaded.root.as_path(), loaded.config.sources.include.as_slice())
    } else {
        (Path::new("."), paths)
    };

    let files = discover(root, patterns)?;
    if files.is_empty() {
        return Err(ConfigError::NoSources {
            patterns: patterns.to_vec(),
        });
    }

    Ok(files)
}

/// Accepts epoch milliseconds or an ISO-8601 timestamp.
pub fn parse_time_bound(raw: &str) -> Result<i64> {
    if let Ok(ms) = raw.trim().parse::<i64>() {
        return Ok(ms);
    }

    match parse_timestamp(raw) {
        Some(ms) => Ok(ms),
        None => bail!("invalid time bound '{raw}': expected epoch milliseconds or ISO-8601"),
    }
}
