use crate::entry::event_data::EventData;
use crate::entry::fields::Fields;
use crate::entry::metrics::MetricSample;
use serde::Serialize;
use serde_json::{Map, Value};

/// Trace levels that count as errors on the timeline.
pub const ERROR_LEVELS: &[&str] = &["Error", "Critical"];

/// `durationInMilliseconds` shows up both as a number and as a string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DurationValue {
    Number(f64),
    Text(String),
}

impl DurationValue {
    pub fn as_millis(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// One validated event.
///
/// Entries are immutable once built. Fields the engine does not know
/// about are kept verbatim in [`LogEntry::extra`] for detail display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    component: String,
    trace_level: String,
    event_timestamp: String,
    message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    operation_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    agent_client_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    duration_in_milliseconds: Option<DurationValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    event_data: Option<EventData>,

    #[serde(skip_serializing_if = "Option::is_none")]
    role_info: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    activity_id: Option<String>,

    #[serde(flatten)]
    extra: Map<String, Value>,

    #[serde(skip)]
    timestamp_ms: i64,

    #[serde(skip)]
    metrics: Option<MetricSample>,
}

impl LogEntry {
    /// Builds an entry from its already validated required fields and the
    /// remaining fields of the decoded line.
    pub(crate) fn from_parts(
        component: String,
        trace_level: String,
        event_timestamp: String,
        timestamp_ms: i64,
        rest: Map<String, Value>,
    ) -> Self {
        let mut fields = Fields::new(rest);

        let message = match fields.take_value("message") {
            Some(Value::String(s)) => s,
            Some(other) => other.to_string(),
            None => String::new(),
        };

        let duration_in_milliseconds = match fields.take_value("durationInMilliseconds") {
            Some(Value::Number(n)) => n.as_f64().map(DurationValue::Number),
            Some(Value::String(s)) => Some(DurationValue::Text(s)),
            Some(other) => Some(DurationValue::Text(other.to_string())),
            None => None,
        };

        let event_data = fields.take_object("eventData").map(EventData::from_map);
        let metrics = event_data.as_ref().and_then(MetricSample::resolve);

        Self {
            component,
            trace_level,
            event_timestamp,
            message,
            operation_name: fields.take_string("operationName"),
            correlation_id: fields.take_string("correlationId"),
            agent_client_id: fields.take_string("agentClientId"),
            duration_in_milliseconds,
            event_data,
            role_info: fields.take_value("roleInfo"),
            activity_id: fields.take_string("activityId"),
            extra: fields.into_extra(),
            timestamp_ms,
            metrics,
        }
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn trace_level(&self) -> &str {
        &self.trace_level
    }

    /// The timestamp exactly as it appeared in the source.
    pub fn event_timestamp(&self) -> &str {
        &self.event_timestamp
    }

    /// `eventTimestamp` in milliseconds since the Unix epoch.
    pub fn timestamp_ms(&self) -> i64 {
        self.timestamp_ms
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn operation_name(&self) -> Option<&str> {
        self.operation_name.as_deref()
    }

    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    pub fn agent_client_id(&self) -> Option<&str> {
        self.agent_client_id.as_deref()
    }

    pub fn duration_in_milliseconds(&self) -> Option<&DurationValue> {
        self.duration_in_milliseconds.as_ref()
    }

    pub fn event_data(&self) -> Option<&EventData> {
        self.event_data.as_ref()
    }

    pub fn role_info(&self) -> Option<&Value> {
        self.role_info.as_ref()
    }

    pub fn activity_id(&self) -> Option<&str> {
        self.activity_id.as_deref()
    }

    /// Fields not recognized by the engine, in source order.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    pub fn metrics(&self) -> Option<&MetricSample> {
        self.metrics.as_ref()
    }

    pub fn is_error(&self) -> bool {
        ERROR_LEVELS.contains(&self.trace_level.as_str())
    }

    /// All known fields plus the preserved extras, as one JSON object.
    pub fn detail(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
