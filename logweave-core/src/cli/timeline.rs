use crate::cli::query::{index_of, time_window};
use crate::cli::render;
use crate::cli::sources::{SourceArgs, load_dataset};
use crate::logging::OutputMode;
use crate::query::{Timeline, activate_bucket};
use anyhow::{Result, bail};
use clap::Args;
use serde_json::json;
use std::io::{self, IsTerminal};
use std::path::Path;

#[derive(Args, Debug, Clone)]
pub struct TimelineArgs {
    /// Start of the zoom window to highlight (epoch ms or ISO-8601)
    #[arg(long)]
    pub from: Option<String>,

    /// End of the zoom window to highlight (epoch ms or ISO-8601)
    #[arg(long)]
    pub to: Option<String>,

    /// Activate the bucket at this index and report the resulting filter
    #[arg(long)]
    pub activate: Option<usize>,
}

pub fn run_timeline(
    config: Option<&Path>,
    sources: &SourceArgs,
    args: &TimelineArgs,
    mode: OutputMode,
) -> Result<()> {
    let (_, dataset) = load_dataset(config, sources)?;
    let timeline = Timeline::build(&dataset);
    let highlighted = time_window(args.from.as_deref(), args.to.as_deref(), &dataset)?
        .and_then(|range| timeline.highlighted(range));

    if let Some(index) = args.activate {
        let Some(bucket) = timeline.buckets().get(index) else {
            bail!(
                "bucket {index} is out of range: timeline has {} buckets",
                timeline.buckets().len()
            );
        };

        let activation = activate_bucket(dataset.entries(), bucket);
        let out = match activation {
            Some(a) => json!({
                "bucket": bucket,
                "level": a.level,
                "entries": a.entry_count,
                "errors": a.error_count,
                "selected": a.selected.map(|i| dataset.entries()[i].detail()),
            }),
            None => json!({ "bucket": bucket, "entries": 0 }),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if mode == OutputMode::Json {
        let out = json!({
            "dataset": dataset.name(),
            "bucketWidthMs": timeline.width(),
            "highlighted": highlighted,
            "buckets": timeline.buckets(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let max_count = timeline.buckets().iter().map(|b| b.count).max().unwrap_or(0);
    println!(
        "{} ({}ms buckets)\n==========================",
        dataset.name(),
        timeline.width()
    );
    println!("  {:<14} {:<40} {:>6} {:>6}", "time", "", "total", "errors");

    for (i, bucket) in timeline.buckets().iter().enumerate() {
        let lit = highlighted.is_some_and(|(first, last)| first <= i && i <= last);
        println!("{}", render::bucket_line(bucket, max_count, lit));
    }

    if let Some(first_error) = dataset.entries().iter().find(|e| e.is_error()) {
        let color = io::stdout().is_terminal();
        println!();
        println!(
            "First error at index {}: {}",
            index_of(&dataset, first_error).unwrap_or_default(),
            render::entry_line(first_error, color)
        );
    }

    Ok(())
}
