//! Fixed-width time buckets for the volume/error timeline.
//!
//! The bucket width is picked once from the total span of the data. Each
//! entry lands in the bucket keyed by its timestamp floored to the width, so
//! buckets never overlap and only spans holding data produce a bucket.

use crate::dataset::Dataset;
use crate::entry::{LogEntry, format_timestamp};
use crate::query::time_range::TimeRange;
use serde::Serialize;
use std::collections::BTreeMap;

const SECOND_MS: i64 = 1_000;
const TEN_SECONDS_MS: i64 = 10_000;
const MINUTE_MS: i64 = 60_000;
const FIVE_MINUTES_MS: i64 = 5 * MINUTE_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// The level filter applied when a bucket holding errors is activated.
pub const ERROR_LEVEL: &str = "Error";

/// Bucket width for data spanning `span_ms` milliseconds.
pub fn bucket_width(span_ms: i64) -> i64 {
    if span_ms < FIVE_MINUTES_MS {
        SECOND_MS
    } else if span_ms < HOUR_MS {
        TEN_SECONDS_MS
    } else {
        MINUTE_MS
    }
}

/// A `[bucket_start, bucket_end)` interval with its entry counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    pub bucket_start: i64,
    pub bucket_end: i64,
    pub label: String,
    pub count: usize,
    pub error_count: usize,
}

impl Bucket {
    pub fn contains(&self, timestamp_ms: i64) -> bool {
        self.bucket_start <= timestamp_ms && timestamp_ms < self.bucket_end
    }
}

/// Buckets of one dataset, sorted by start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    width: i64,
    buckets: Vec<Bucket>,
}

impl Timeline {
    /// Always built over the full, unfiltered entries.
    pub fn build(dataset: &Dataset) -> Self {
        Self::from_entries(dataset.entries())
    }

    /// Entries need not be sorted.
    pub fn from_entries(entries: &[LogEntry]) -> Self {
        let (min, max) = entries
            .iter()
            .map(LogEntry::timestamp_ms)
            .fold((i64::MAX, i64::MIN), |(lo, hi), ts| (lo.min(ts), hi.max(ts)));
        let span = if entries.is_empty() { 0 } else { max - min };

        let width = bucket_width(span);
        let label_format = label_format(width, span);

        let mut tally: BTreeMap<i64, (usize, usize)> = BTreeMap::new();
        for entry in entries {
            let key = entry.timestamp_ms().div_euclid(width) * width;
            let (count, errors) = tally.entry(key).or_insert((0, 0));
            *count += 1;
            if entry.is_error() {
                *errors += 1;
            }
        }

        let buckets = tally
            .into_iter()
            .map(|(start, (count, error_count))| Bucket {
                bucket_start: start,
                bucket_end: start + width,
                label: format_timestamp(start, label_format),
                count,
                error_count,
            })
            .collect();

        Self { width, buckets }
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub fn into_buckets(self) -> Vec<Bucket> {
        self.buckets
    }

    pub fn total_count(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }

    /// Time range covered by the buckets `first..=last` (indices in either
    /// order). The end extends to the end of the last bucket, so selecting a
    /// single bucket still yields a non-degenerate range.
    pub fn selection_range(&self, first: usize, last: usize) -> Option<TimeRange> {
        let (first, last) = (first.min(last), first.max(last));
        let start = self.buckets.get(first)?.bucket_start;
        let end = self.buckets.get(last)?.bucket_end;

        Some(TimeRange::new(start, end))
    }

    /// Indices of the buckets overlapping a zoom range, for highlighting.
    pub fn highlighted(&self, range: TimeRange) -> Option<(usize, usize)> {
        let first = self
            .buckets
            .iter()
            .position(|b| b.bucket_end > range.start)?;
        let last = self
            .buckets
            .iter()
            .rposition(|b| b.bucket_start <= range.end)?;

        (first <= last).then_some((first, last))
    }
}

/// Buckets for the whole dataset.
pub fn bucket(dataset: &Dataset) -> Vec<Bucket> {
    Timeline::build(dataset).into_buckets()
}

/// Outcome of activating (clicking) a single bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketActivation {
    /// `"Error"` when the bucket holds errors, empty to clear the level
    /// filter otherwise.
    pub level: String,

    /// Index into the examined entries of the bucket's only error, if it has
    /// exactly one.
    pub selected: Option<usize>,

    pub entry_count: usize,
    pub error_count: usize,
}

/// Applies the click policy to the entries falling in `bucket`.
///
/// Returns `None` when the bucket holds no entries at all; the caller
/// keeps its current filter.
pub fn activate_bucket(entries: &[LogEntry], bucket: &Bucket) -> Option<BucketActivation> {
    let mut entry_count = 0;
    let mut errors = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        if bucket.contains(entry.timestamp_ms()) {
            entry_count += 1;
            if entry.is_error() {
                errors.push(index);
            }
        }
    }

    if entry_count == 0 {
        return None;
    }

    let activation = match errors.as_slice() {
        [] => BucketActivation {
            level: String::new(),
            selected: None,
            entry_count,
            error_count: 0,
        },
        [only] => BucketActivation {
            level: ERROR_LEVEL.to_string(),
            selected: Some(*only),
            entry_count,
            error_count: 1,
        },
        many => BucketActivation {
            level: ERROR_LEVEL.to_string(),
            selected: None,
            entry_count,
            error_count: many.len(),
        },
    };

    Some(activation)
}

fn label_format(width: i64, span: i64) -> &'static str {
    match (span >= DAY_MS, width < MINUTE_MS) {
        (true, _) => "%m-%d %H:%M",
        (false, true) => "%H:%M:%S",
        (false, false) => "%H:%M",
    }
}
