use crate::entry::{DurationValue, LogEntry, MetricSample};
use pretty_assertions::assert_eq;
use serde_json::{Map, Value, json};

fn entry_from(rest: Value) -> LogEntry {
    let Value::Object(map) = rest else {
        panic!("test fixture must be an object");
    };
    LogEntry::from_parts(
        "Agent".to_string(),
        "Info".to_string(),
        "2024-03-01T09:00:00Z".to_string(),
        1_709_283_600_000,
        map,
    )
}

#[test]
fn known_fields_are_typed() {
    // Arrange / Act
    let entry = entry_from(json!({
        "message": "started",
        "operationName": "Run",
        "correlationId": "c-1",
        "agentClientId": "a-1",
        "activityId": "act-1",
        "durationInMilliseconds": "12.5",
        "roleInfo": { "role": "robot" }
    }));

    // Assert
    assert_eq!(entry.message(), "started");
    assert_eq!(entry.operation_name(), Some("Run"));
    assert_eq!(entry.correlation_id(), Some("c-1"));
    assert_eq!(entry.agent_client_id(), Some("a-1"));
    assert_eq!(entry.activity_id(), Some("act-1"));
    assert_eq!(
        entry.duration_in_milliseconds(),
        Some(&DurationValue::Text("12.5".to_string()))
    );
    assert_eq!(
        entry.duration_in_milliseconds().and_then(DurationValue::as_millis),
        Some(12.5)
    );
    assert_eq!(entry.role_info(), Some(&json!({ "role": "robot" })));
    assert!(entry.extra().is_empty());
}

#[test]
fn unknown_fields_are_preserved_in_order() {
    let entry = entry_from(json!({
        "message": "m",
        "zeta": 1,
        "alpha": { "nested": true }
    }));

    let keys: Vec<&String> = entry.extra().keys().collect();

    assert_eq!(keys, vec!["zeta", "alpha"]);
}

#[test]
fn mistyped_known_fields_fall_back_to_extra() {
    let entry = entry_from(json!({
        "operationName": 42,
        "eventData": "not an object"
    }));

    assert_eq!(entry.operation_name(), None);
    assert!(entry.event_data().is_none());
    assert_eq!(entry.extra().get("operationName"), Some(&json!(42)));
    assert_eq!(entry.extra().get("eventData"), Some(&json!("not an object")));
}

#[test]
fn missing_message_is_empty() {
    let entry = entry_from(json!({}));

    assert_eq!(entry.message(), "");
}

#[test]
fn perf_counters_resolve_to_perf_sample() {
    let entry = entry_from(json!({
        "eventData": {
            "perfCounters": {
                "totalCpuUsagePercent": 40.5,
                "availableMemoryMB": "2048",
                "processorQueueLength": 3
            },
            "machineInfo": { "cpuLoad": 99 }
        }
    }));

    let sample = entry.metrics().copied().unwrap();

    assert_eq!(
        sample,
        MetricSample::PerfCounters {
            cpu: Some(40.5),
            memory: Some(2048.0),
            process_cpu: None,
            queue_length: Some(3.0),
        }
    );
    assert_eq!(sample.process_cpu(), 0.0);
}

#[test]
fn machine_info_resolves_to_legacy_sample() {
    let entry = entry_from(json!({
        "eventData": {
            "machineInfo": { "cpuLoad": 12, "physicalFreeMemoryMB": 512, "osVersion": "10" },
            "processInfo": { "cpuLoad": 3 }
        }
    }));

    let sample = entry.metrics().copied().unwrap();

    assert_eq!(sample.cpu(), 12.0);
    assert_eq!(sample.memory(), 512.0);
    assert_eq!(sample.process_cpu(), 3.0);
    assert_eq!(sample.queue_length(), 0.0);
    assert_eq!(
        entry
            .event_data()
            .and_then(|d| d.machine_info.as_ref())
            .and_then(|m| m.extra.get("osVersion")),
        Some(&json!("10"))
    );
}

#[test]
fn machine_info_without_metrics_has_no_sample() {
    let entry = entry_from(json!({
        "eventData": { "machineInfo": { "osVersion": "10" } }
    }));

    assert!(entry.metrics().is_none());
}

#[test]
fn non_numeric_machine_info_still_yields_a_sample() {
    let entry = entry_from(json!({
        "eventData": { "machineInfo": { "cpuLoad": "N/A" } }
    }));

    let sample = entry.metrics().copied().unwrap();

    assert_eq!(sample.cpu(), 0.0);
    assert_eq!(sample.memory(), 0.0);
}

#[test]
fn error_and_critical_count_as_errors() {
    let mut map = Map::new();
    map.insert("message".into(), json!("boom"));
    let critical = LogEntry::from_parts(
        "Agent".into(),
        "Critical".into(),
        "2024-03-01T09:00:00Z".into(),
        0,
        map,
    );

    assert!(critical.is_error());
    assert!(!entry_from(json!({})).is_error());
}

#[test]
fn detail_round_trips_known_and_extra_fields() {
    let entry = entry_from(json!({
        "message": "hello",
        "operationName": "Run",
        "custom": [1, 2]
    }));

    let detail = entry.detail();

    assert_eq!(detail["component"], json!("Agent"));
    assert_eq!(detail["traceLevel"], json!("Info"));
    assert_eq!(detail["eventTimestamp"], json!("2024-03-01T09:00:00Z"));
    assert_eq!(detail["operationName"], json!("Run"));
    assert_eq!(detail["custom"], json!([1, 2]));
    assert!(detail.get("correlationId").is_none());
}
