use crate::entry::LogEntry;
use crate::query::time_range::TimeRange;
use serde::{Deserialize, Serialize};

/// Declarative entry filter. An empty field places no constraint on its
/// dimension; all non-empty fields must hold at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogFilter {
    /// Case-insensitive substring of `message` or `operationName`.
    #[serde(default)]
    pub search: String,

    /// Exact `traceLevel`.
    #[serde(default)]
    pub level: String,

    /// Exact `component`.
    #[serde(default)]
    pub component: String,
}

impl LogFilter {
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.level.is_empty() && self.component.is_empty()
    }

    pub fn matches(&self, entry: &LogEntry) -> bool {
        Matcher::new(self).matches(entry)
    }
}

/// A filter with its search term lower-cased once up front.
struct Matcher<'f> {
    search: Option<String>,
    level: Option<&'f str>,
    component: Option<&'f str>,
}

impl<'f> Matcher<'f> {
    fn new(filter: &'f LogFilter) -> Self {
        let non_empty = |s: &'f str| (!s.is_empty()).then_some(s);

        Self {
            search: non_empty(filter.search.as_str()).map(str::to_lowercase),
            level: non_empty(filter.level.as_str()),
            component: non_empty(filter.component.as_str()),
        }
    }

    fn matches(&self, entry: &LogEntry) -> bool {
        if let Some(level) = self.level {
            if entry.trace_level() != level {
                return false;
            }
        }

        if let Some(component) = self.component {
            if entry.component() != component {
                return false;
            }
        }

        match &self.search {
            None => true,
            Some(needle) => {
                contains_ignore_case(entry.message(), needle)
                    || entry
                        .operation_name()
                        .is_some_and(|op| contains_ignore_case(op, needle))
            }
        }
    }
}

fn contains_ignore_case(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

/// Entries matching `filter` and falling inside `range`, in dataset order.
pub fn filter<'a>(
    entries: &'a [LogEntry],
    filter: &LogFilter,
    range: Option<TimeRange>,
) -> Vec<&'a LogEntry> {
    let matcher = Matcher::new(filter);

    entries
        .iter()
        .filter(|entry| range.is_none_or(|r| r.contains(entry.timestamp_ms())))
        .filter(|entry| matcher.matches(entry))
        .collect()
}
