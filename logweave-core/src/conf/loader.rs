use crate::conf::error::ConfigError;
use crate::conf::types::LogweaveConfig;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "logweave.hcl";

/// A validated configuration and where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: LogweaveConfig,

    /// Directory that relative `include` patterns resolve against.
    pub root: PathBuf,

    /// `None` when no file was found and defaults are in effect.
    pub origin: Option<PathBuf>,
}

/// Loads and validates the config file at `path`.
pub fn load_config(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let config: LogweaveConfig =
        hcl::from_str(&contents).map_err(|e| ConfigError::parse(path, e))?;

    validate(&config)?;

    Ok(LoadedConfig {
        config,
        root: config_root(path),
        origin: Some(path.to_path_buf()),
    })
}

/// Loads an explicitly requested file, or `logweave.hcl` from the working
/// directory if it exists, or falls back to defaults.
pub fn load_config_or_default(path: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    if let Some(path) = path {
        return load_config(path);
    }

    match load_config(Path::new(DEFAULT_CONFIG_FILE)) {
        Err(ConfigError::ReadFile { source, .. }) if source.kind() == ErrorKind::NotFound => {
            Ok(LoadedConfig {
                config: LogweaveConfig::default(),
                root: PathBuf::from("."),
                origin: None,
            })
        }
        other => other,
    }
}

pub fn validate(config: &LogweaveConfig) -> Result<(), ConfigError> {
    let engine = &config.engine;

    if engine.page_size == 0 {
        return Err(ConfigError::InvalidPageSize {
            page_size: engine.page_size,
        });
    }

    if engine.metric_cap == 0 {
        return Err(ConfigError::InvalidMetricCap {
            metric_cap: engine.metric_cap,
        });
    }

    if engine.max_concurrent_sources == 0 {
        return Err(ConfigError::InvalidConcurrency {
            max_concurrent_sources: engine.max_concurrent_sources,
        });
    }

    Ok(())
}

fn config_root(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
