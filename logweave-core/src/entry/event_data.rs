use crate::entry::fields::Fields;
use serde::Serialize;
use serde_json::{Map, Value};

/// Nested `eventData` payload of an entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perf_counters: Option<PerfCounters>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine_info: Option<MachineInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_info: Option<ProcessInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_info: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui_flow_service_processing_info: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Counters reported by newer agents under `eventData.perfCounters`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerfCounters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cpu_usage_percent: Option<f64>,

    #[serde(rename = "availableMemoryMB", skip_serializing_if = "Option::is_none")]
    pub available_memory_mb: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_cpu_usage_percent: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_queue_length: Option<f64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Host figures reported by legacy agents under `eventData.machineInfo`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_load: Option<f64>,

    #[serde(rename = "physicalFreeMemoryMB", skip_serializing_if = "Option::is_none")]
    pub physical_free_memory_mb: Option<f64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_load: Option<f64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EventData {
    pub(crate) fn from_map(map: Map<String, Value>) -> Self {
        let mut fields = Fields::new(map);

        Self {
            perf_counters: fields.take_object("perfCounters").map(PerfCounters::from_map),
            machine_info: fields.take_object("machineInfo").map(MachineInfo::from_map),
            process_info: fields.take_object("processInfo").map(ProcessInfo::from_map),
            execution_info: fields.take_value("executionInfo"),
            ui_flow_service_processing_info: fields.take_value("uiFlowServiceProcessingInfo"),
            extra: fields.into_extra(),
        }
    }
}

impl PerfCounters {
    fn from_map(map: Map<String, Value>) -> Self {
        let mut fields = Fields::new(map);

        Self {
            total_cpu_usage_percent: fields.take_number("totalCpuUsagePercent"),
            available_memory_mb: fields.take_number("availableMemoryMB"),
            process_cpu_usage_percent: fields.take_number("processCpuUsagePercent"),
            processor_queue_length: fields.take_number("processorQueueLength"),
            extra: fields.into_extra(),
        }
    }
}

impl MachineInfo {
    fn from_map(map: Map<String, Value>) -> Self {
        let mut fields = Fields::new(map);

        Self {
            cpu_load: fields.take_number("cpuLoad"),
            physical_free_memory_mb: fields.take_number("physicalFreeMemoryMB"),
            extra: fields.into_extra(),
        }
    }

    /// True when the entry carries either legacy host metric key. A value
    /// that is not a number still counts; it plots as zero.
    pub fn has_metrics(&self) -> bool {
        self.cpu_load.is_some()
            || self.physical_free_memory_mb.is_some()
            || self.extra.contains_key("cpuLoad")
            || self.extra.contains_key("physicalFreeMemoryMB")
    }
}

impl ProcessInfo {
    fn from_map(map: Map<String, Value>) -> Self {
        let mut fields = Fields::new(map);

        Self {
            cpu_load: fields.take_number("cpuLoad"),
            extra: fields.into_extra(),
        }
    }
}
