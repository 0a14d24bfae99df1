use crate::cli::render;
use crate::cli::sources::{SourceArgs, load_dataset, parse_time_bound};
use crate::dataset::Dataset;
use crate::entry::LogEntry;
use crate::logging::OutputMode;
use crate::query::{LogFilter, TimeRange, ViewState};
use anyhow::Result;
use clap::Args;
use serde_json::{Value, json};
use std::io::{self, IsTerminal};
use std::path::Path;

#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive text in the message or operation name
    #[arg(long, default_value = "")]
    pub search: String,

    /// Exact trace level, e.g. Error
    #[arg(long, default_value = "")]
    pub level: String,

    /// Exact component name
    #[arg(long, default_value = "")]
    pub component: String,

    /// Start of the time window (epoch ms or ISO-8601), inclusive
    #[arg(long)]
    pub from: Option<String>,

    /// End of the time window (epoch ms or ISO-8601), inclusive
    #[arg(long)]
    pub to: Option<String>,
}

impl FilterArgs {
    pub fn filter(&self) -> LogFilter {
        LogFilter {
            search: self.search.clone(),
            level: self.level.clone(),
            component: self.component.clone(),
        }
    }

    pub fn time_range(&self, dataset: &Dataset) -> Result<Option<TimeRange>> {
        time_window(self.from.as_deref(), self.to.as_deref(), dataset)
    }

    pub fn view(&self, dataset: &Dataset) -> Result<ViewState> {
        let mut view = ViewState::new();
        view.set_filter(self.filter());
        view.set_time_range(self.time_range(dataset)?);
        Ok(view)
    }
}

#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Entries per page (defaults to the configured page size)
    #[arg(long)]
    pub page_size: Option<usize>,
}

pub fn run_query(
    config: Option<&Path>,
    sources: &SourceArgs,
    args: &QueryArgs,
    mode: OutputMode,
) -> Result<()> {
    let (loaded, dataset) = load_dataset(config, sources)?;
    let page_size = args.page_size.unwrap_or(loaded.config.engine.page_size);

    let mut view = args.filter.view(&dataset)?;
    view.set_page(args.page);

    let result = view.evaluate(&dataset, page_size);
    let page = result.current_page();

    if mode == OutputMode::Json {
        let items: Vec<Value> = page.items.iter().map(|e| e.detail()).collect();
        let out = json!({
            "dataset": dataset.name(),
            "page": page.page,
            "totalPages": page.total_pages,
            "totalMatches": page.total_items,
            "items": items,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!(
        "{}: {} of {} entries match, page {}/{}",
        dataset.name(),
        page.total_items,
        dataset.len(),
        page.page,
        page.total_pages
    );
    println!();
    let color = io::stdout().is_terminal();
    for entry in page.items {
        println!("{}", render::entry_line(entry, color));
    }

    Ok(())
}

/// A missing bound falls back to the dataset's own first or last
/// timestamp. No bounds at all means the full range.
pub(crate) fn time_window(
    from: Option<&str>,
    to: Option<&str>,
    dataset: &Dataset,
) -> Result<Option<TimeRange>> {
    if from.is_none() && to.is_none() {
        return Ok(None);
    }
    let Some(span) = dataset.span() else {
        return Ok(None);
    };

    let start = match from {
        Some(raw) => parse_time_bound(raw)?,
        None => span.start,
    };
    let end = match to {
        Some(raw) => parse_time_bound(raw)?,
        None => span.end,
    };

    Ok(Some(TimeRange::new(start, end)))
}

/// Position of `entry` in the dataset, for pointing `show` at it.
pub(crate) fn index_of(dataset: &Dataset, entry: &LogEntry) -> Option<usize> {
    dataset
        .entries()
        .iter()
        .position(|candidate| std::ptr::eq(candidate, entry))
}
