use crate::telemetry::sample::{TelemetryChannel, TelemetrySample};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlarmKind {
    Low,
    High,
}

impl fmt::Display for AlarmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlarmKind::Low => f.write_str("LOW"),
            AlarmKind::High => f.write_str("HIGH"),
        }
    }
}

/// Threshold violation summary for one channel over a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alarm {
    pub signal: TelemetryChannel,
    pub kind: AlarmKind,
    pub count: usize,
}

/// Limits checked by [`scan_alarms`]; comparisons are strict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlarmThresholds {
    pub battery_low: f64,
    pub temp_external_high: f64,
    pub memory_high: f64,
}

impl Default for AlarmThresholds {
    fn default() -> Self {
        Self {
            battery_low: 20.0,
            temp_external_high: 75.0,
            memory_high: 85.0,
        }
    }
}

impl AlarmThresholds {
    /// Alarms in fixed order (Battery, Temp_Ex, Mem_Usage); silent channels are omitted.
    pub fn scan(&self, samples: &[TelemetrySample]) -> Vec<Alarm> {
        let rules = [
            (TelemetryChannel::Battery, AlarmKind::Low, self.battery_low),
            (
                TelemetryChannel::TempExternal,
                AlarmKind::High,
                self.temp_external_high,
            ),
            (TelemetryChannel::Memory, AlarmKind::High, self.memory_high),
        ];

        rules
            .into_iter()
            .filter_map(|(signal, kind, limit)| {
                let count = samples
                    .iter()
                    .map(|sample| signal.value(sample))
                    .filter(|value| match kind {
                        AlarmKind::Low => *value < limit,
                        AlarmKind::High => *value > limit,
                    })
                    .count();
                (count > 0).then_some(Alarm {
                    signal,
                    kind,
                    count,
                })
            })
            .collect()
    }
}

pub fn scan_alarms(samples: &[TelemetrySample]) -> Vec<Alarm> {
    AlarmThresholds::default().scan(samples)
}
