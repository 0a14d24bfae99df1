
use crate::dataset::Dataset;
use crate::entry::{LogEntry, format_rfc3339};
use crate::ingest::{ingest_content, merge, parse_line};
use serde_json::{Value, json};

//-----------------------------------------------------------------------------
// Test helpers
//-----------------------------------------------------------------------------

/// Epoch milliseconds of 2024-03-01T09:00:00Z.
pub(crate) const T0: i64 = 1_709_283_600_000;

pub(crate) fn record(ts_ms: i64, level: &str, component: &str, message: &str) -> Value {
    json!({
        "eventTimestamp": format_rfc3339(ts_ms),
        "traceLevel": level,
        "component": component,
        "message": message,
    })
}

pub(crate) fn entry(ts_ms: i64, level: &str, component: &str, message: &str) -> LogEntry {
    parse_line(&record(ts_ms, level, component, message).to_string())
        .expect("fixture must be a valid record")
}

pub(crate) fn dataset_of(records: &[Value]) -> Dataset {
    let content = records
        .iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    merge(vec![ingest_content("fixture.log", &content)]).expect("fixture must not be empty")
}
