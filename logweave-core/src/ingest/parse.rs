use crate::entry::{LogEntry, parse_timestamp};
use serde_json::{Map, Value};

/// Turns one line of text into a log entry.
///
/// Returns `None` for anything that is not a log record: lines that are not
/// a JSON object, and objects missing a non-empty `eventTimestamp`,
/// `component` or `traceLevel`. Rotated logs routinely end in a truncated
/// line, so rejection is silent.
///
/// An `eventTimestamp` that is not a parseable ISO-8601 datetime is
/// rejected as well, since the entry could not be placed on the timeline.
pub fn parse_line(line: &str) -> Option<LogEntry> {
    let line = line.trim_start_matches('\u{feff}').trim();
    if !line.starts_with('{') {
        return None;
    }

    let Ok(Value::Object(mut record)) = serde_json::from_str::<Value>(line) else {
        return None;
    };

    let event_timestamp = take_required(&mut record, "eventTimestamp")?;
    let component = take_required(&mut record, "component")?;
    let trace_level = take_required(&mut record, "traceLevel")?;
    let timestamp_ms = parse_timestamp(&event_timestamp)?;

    Some(LogEntry::from_parts(
        component,
        trace_level,
        event_timestamp,
        timestamp_ms,
        record,
    ))
}

fn take_required(record: &mut Map<String, Value>, key: &str) -> Option<String> {
    match record.shift_remove(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        _ => None,
    }
}
