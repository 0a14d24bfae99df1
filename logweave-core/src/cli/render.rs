use crate::entry::{LogEntry, format_rfc3339};
use crate::query::{Bucket, MetricPoint};
use owo_colors::OwoColorize;

const BAR_WIDTH: usize = 40;

pub(crate) fn level(level: &str, color: bool) -> String {
    let padded = format!("{level:<8}");
    if !color {
        return padded;
    }

    match level {
        "Critical" => padded.red().bold().to_string(),
        "Error" => padded.red().to_string(),
        "Warning" => padded.yellow().to_string(),
        "Info" => padded.green().to_string(),
        _ => padded.dimmed().to_string(),
    }
}

pub(crate) fn entry_line(entry: &LogEntry, color: bool) -> String {
    let mut out = format!(
        "{} {} [{}] {}",
        format_rfc3339(entry.timestamp_ms()),
        level(entry.trace_level(), color),
        entry.component(),
        entry.message()
    );

    if let Some(op) = entry.operation_name() {
        out.push_str(&format!(" ({op})"));
    }

    out
}

pub(crate) fn bucket_line(bucket: &Bucket, max_count: usize, highlighted: bool) -> String {
    let bars = if max_count == 0 {
        0
    } else {
        ((bucket.count * BAR_WIDTH).div_ceil(max_count)).max(1)
    };
    let marker = if highlighted { '>' } else { ' ' };

    format!(
        "{marker} {:<14} {:<width$} {:>6} {:>6}",
        bucket.label,
        "█".repeat(bars),
        bucket.count,
        bucket.error_count,
        width = BAR_WIDTH
    )
}

pub(crate) fn metric_line(point: &MetricPoint) -> String {
    format!(
        "{}  cpu {:>6.1}%  process {:>6.1}%  memory {:>9.1} MB  queue {:>4}",
        format_rfc3339(point.timestamp),
        point.cpu,
        point.process_cpu,
        point.memory,
        point.queue_length
    )
}
