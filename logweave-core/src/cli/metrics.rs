use crate::cli::query::FilterArgs;
use crate::cli::render;
use crate::cli::sources::{SourceArgs, load_dataset};
use crate::logging::OutputMode;
use crate::query::{downsample, filter};
use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Args, Debug, Clone)]
pub struct MetricsArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Maximum number of points (defaults to the configured metric cap)
    #[arg(long)]
    pub cap: Option<usize>,
}

pub fn run_metrics(
    config: Option<&Path>,
    sources: &SourceArgs,
    args: &MetricsArgs,
    mode: OutputMode,
) -> Result<()> {
    let (loaded, dataset) = load_dataset(config, sources)?;
    let cap = args.cap.unwrap_or(loaded.config.engine.metric_cap);

    let matches = filter(
        dataset.entries(),
        &args.filter.filter(),
        args.filter.time_range(&dataset)?,
    );
    let points = downsample(matches, cap);

    if mode == OutputMode::Json {
        println!("{}", serde_json::to_string_pretty(&points)?);
        return Ok(());
    }

    println!("{}: {} metric points (cap {cap})", dataset.name(), points.len());
    println!();
    for point in &points {
        println!("{}", render::metric_line(point));
    }

    Ok(())
}
