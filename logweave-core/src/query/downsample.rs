use crate::entry::LogEntry;
use serde::Serialize;

/// Default upper bound on plotted metric points.
pub const DEFAULT_METRIC_CAP: usize = 500;

/// One plotted performance sample. Missing figures are `0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricPoint {
    pub timestamp: i64,
    pub cpu: f64,
    pub process_cpu: f64,
    pub memory: f64,
    pub queue_length: f64,
}

/// Extracts metric points from the entries carrying performance data and
/// keeps every `ceil(n / cap)`-th of them, starting with the first.
///
/// The output has at most `cap` points and keeps the input order.
pub fn downsample<'a, I>(entries: I, cap: usize) -> Vec<MetricPoint>
where
    I: IntoIterator<Item = &'a LogEntry>,
{
    if cap == 0 {
        return Vec::new();
    }

    let carrying: Vec<&LogEntry> = entries
        .into_iter()
        .filter(|entry| entry.metrics().is_some())
        .collect();

    let stride = carrying.len().div_ceil(cap).max(1);

    carrying
        .into_iter()
        .step_by(stride)
        .filter_map(|entry| {
            let sample = entry.metrics()?;
            Some(MetricPoint {
                timestamp: entry.timestamp_ms(),
                cpu: sample.cpu(),
                process_cpu: sample.process_cpu(),
                memory: sample.memory(),
                queue_length: sample.queue_length(),
            })
        })
        .collect()
}
