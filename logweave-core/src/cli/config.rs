use crate::conf::{discover, load_config_or_default};
use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration and exit
    Check {
        /// Path to the config file (defaults to ./logweave.hcl)
        path: Option<PathBuf>,
    },

    /// Print resolved configuration as JSON
    Dump {
        /// Path to the config file (defaults to ./logweave.hcl)
        path: Option<PathBuf>,
    },
}

pub fn check(path: Option<PathBuf>) -> Result<()> {
    let loaded = load_config_or_default(path.as_deref())?;
    let files = discover(&loaded.root, &loaded.config.sources.include)?;
    let engine = &loaded.config.engine;

    match &loaded.origin {
        Some(origin) => println!("✔ Config loaded from {}", origin.display()),
        None => println!("✔ No config file found, using defaults"),
    }
    println!("✔ page size {}", engine.page_size);
    println!("✔ metric cap {}", engine.metric_cap);
    println!("✔ {} concurrent sources", engine.max_concurrent_sources);
    println!(
        "✔ {} include patterns matching {} files",
        loaded.config.sources.include.len(),
        files.len()
    );

    Ok(())
}

pub fn dump(path: Option<PathBuf>) -> Result<()> {
    let loaded = load_config_or_default(path.as_deref())?;
    dump_json(&loaded.config)
}

fn dump_json<T: Serialize>(value: &T) -> Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}
