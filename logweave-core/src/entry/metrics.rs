use crate::entry::event_data::EventData;

/// Performance figures of one entry, resolved once from whichever
/// schema shape the emitting agent used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricSample {
    /// `eventData.perfCounters`
    PerfCounters {
        cpu: Option<f64>,
        memory: Option<f64>,
        process_cpu: Option<f64>,
        queue_length: Option<f64>,
    },

    /// `eventData.machineInfo` with `eventData.processInfo`. Legacy agents
    /// do not report a processor queue length.
    MachineInfo {
        cpu: Option<f64>,
        memory: Option<f64>,
        process_cpu: Option<f64>,
    },
}

impl MetricSample {
    /// `perfCounters` wins when both shapes are present.
    pub(crate) fn resolve(data: &EventData) -> Option<Self> {
        if let Some(perf) = &data.perf_counters {
            return Some(Self::PerfCounters {
                cpu: perf.total_cpu_usage_percent,
                memory: perf.available_memory_mb,
                process_cpu: perf.process_cpu_usage_percent,
                queue_length: perf.processor_queue_length,
            });
        }

        let machine = data.machine_info.as_ref().filter(|m| m.has_metrics())?;

        Some(Self::MachineInfo {
            cpu: machine.cpu_load,
            memory: machine.physical_free_memory_mb,
            process_cpu: data.process_info.as_ref().and_then(|p| p.cpu_load),
        })
    }

    pub fn cpu(&self) -> f64 {
        match self {
            Self::PerfCounters { cpu, .. } | Self::MachineInfo { cpu, .. } => cpu.unwrap_or(0.0),
        }
    }

    pub fn memory(&self) -> f64 {
        match self {
            Self::PerfCounters { memory, .. } | Self::MachineInfo { memory, .. } => {
                memory.unwrap_or(0.0)
            }
        }
    }

    pub fn process_cpu(&self) -> f64 {
        match self {
            Self::PerfCounters { process_cpu, .. } | Self::MachineInfo { process_cpu, .. } => {
                process_cpu.unwrap_or(0.0)
            }
        }
    }

    pub fn queue_length(&self) -> f64 {
        match self {
            Self::PerfCounters { queue_length, .. } => queue_length.unwrap_or(0.0),
            Self::MachineInfo { .. } => 0.0,
        }
    }
}
