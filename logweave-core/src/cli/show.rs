use crate::cli::sources::{SourceArgs, load_dataset};
use anyhow::{Result, bail};
use clap::Args;
use std::path::Path;

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// 0-based position of the entry in the merged timeline
    #[arg(long)]
    pub index: usize,
}

/// Prints every field of one entry, including unrecognized ones.
pub fn run_show(config: Option<&Path>, sources: &SourceArgs, args: &ShowArgs) -> Result<()> {
    let (_, dataset) = load_dataset(config, sources)?;

    let Some(entry) = dataset.entries().get(args.index) else {
        bail!(
            "entry {} is out of range: '{}' has {} entries",
            args.index,
            dataset.name(),
            dataset.len()
        );
    };

    println!("{}", serde_json::to_string_pretty(&entry.detail())?);
    Ok(())
}
