mod discover;
mod error;
mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use discover::{discover, resolve_glob};
pub use error::ConfigError;
pub use loader::{DEFAULT_CONFIG_FILE, LoadedConfig, load_config, load_config_or_default, validate};
pub use types::*;
