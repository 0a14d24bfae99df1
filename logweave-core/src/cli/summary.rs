use crate::cli::sources::{SourceArgs, load_dataset};
use crate::entry::format_rfc3339;
use crate::logging::OutputMode;
use crate::query::Timeline;
use anyhow::Result;
use serde_json::json;
use std::path::Path;

pub fn run_summary(config: Option<&Path>, sources: &SourceArgs, mode: OutputMode) -> Result<()> {
    let (_, dataset) = load_dataset(config, sources)?;
    let span = dataset.span();
    let timeline = Timeline::build(&dataset);

    if mode == OutputMode::Json {
        let summary = json!({
            "name": dataset.name(),
            "entries": dataset.len(),
            "sources": dataset.sources(),
            "start": span.map(|s| format_rfc3339(s.start)),
            "end": span.map(|s| format_rfc3339(s.end)),
            "bucketWidthMs": timeline.width(),
            "buckets": timeline.buckets().len(),
            "components": dataset.unique_components(),
            "levels": dataset.level_counts(),
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("✔ {}", dataset.name());
    println!("✔ {} entries from {} source(s)", dataset.len(), dataset.sources().len());
    if let Some(span) = span {
        println!(
            "✔ {} → {} ({}s)",
            format_rfc3339(span.start),
            format_rfc3339(span.end),
            span.duration_ms() / 1_000
        );
    }
    println!(
        "✔ {} buckets of {}ms",
        timeline.buckets().len(),
        timeline.width()
    );
    println!();

    println!("Levels:");
    for (level, count) in dataset.level_counts() {
        println!("  {level:<10} {count}");
    }

    println!("Components:");
    for component in dataset.unique_components() {
        println!("  {component}");
    }

    Ok(())
}
