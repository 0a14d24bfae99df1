use logweave_core::entry::format_rfc3339;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

/// 2024-03-01T09:00:00Z
pub const T0: i64 = 1_709_283_600_000;

/// Builder for one JSON log line.
#[derive(Debug, Clone)]
pub struct LogLine {
    pub timestamp_ms: i64,
    pub level: &'static str,
    pub component: &'static str,
    pub message: String,
    pub cpu: Option<f64>,
}

impl LogLine {
    pub fn new(timestamp_ms: i64, level: &'static str, component: &'static str) -> Self {
        Self {
            timestamp_ms,
            level,
            component,
            message: format!("{component} {level} at {timestamp_ms}"),
            cpu: None,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn cpu(mut self, cpu: f64) -> Self {
        self.cpu = Some(cpu);
        self
    }

    pub fn render(&self) -> String {
        let mut line = json!({
            "eventTimestamp": format_rfc3339(self.timestamp_ms),
            "component": self.component,
            "traceLevel": self.level,
            "message": self.message,
        });

        if let Some(cpu) = self.cpu {
            line["eventData"] = json!({
                "perfCounters": {
                    "totalCpuUsagePercent": cpu,
                    "availableMemoryMB": 2048,
                }
            });
        }

        line.to_string()
    }
}

pub fn lines_to_content(lines: &[LogLine]) -> String {
    lines
        .iter()
        .map(LogLine::render)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes `content` to `dir/name` and returns the full path.
pub fn write_source(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("failed to write fixture source");
    path
}
