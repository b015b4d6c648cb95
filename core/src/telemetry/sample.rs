use crate::prelude::SimResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;

/// One row of bus telemetry. Field order is the CSV column order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySample {
    #[serde(rename = "Time")]
    pub time: f64,
    #[serde(rename = "Gen_Power")]
    pub generated_power: f64,
    #[serde(rename = "Cons_Power")]
    pub consumed_power: f64,
    #[serde(rename = "Battery")]
    pub battery_pct: f64,
    #[serde(rename = "Roll")]
    pub roll: f64,
    #[serde(rename = "Pitch")]
    pub pitch: f64,
    #[serde(rename = "Temp_In")]
    pub temp_internal: f64,
    #[serde(rename = "Temp_Ex")]
    pub temp_external: f64,
    #[serde(rename = "RW_Speed")]
    pub reaction_wheel_speed: f64,
    #[serde(rename = "Mem_Usage")]
    pub recorder_memory_pct: f64,
}

/// Named telemetry column, as shown to operators and used in alarms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TelemetryChannel {
    #[serde(rename = "Gen_Power")]
    GeneratedPower,
    #[serde(rename = "Cons_Power")]
    ConsumedPower,
    #[serde(rename = "Battery")]
    Battery,
    #[serde(rename = "Roll")]
    Roll,
    #[serde(rename = "Pitch")]
    Pitch,
    #[serde(rename = "Temp_In")]
    TempInternal,
    #[serde(rename = "Temp_Ex")]
    TempExternal,
    #[serde(rename = "RW_Speed")]
    WheelSpeed,
    #[serde(rename = "Mem_Usage")]
    Memory,
}

impl TelemetryChannel {
    pub const ALL: [TelemetryChannel; 9] = [
        TelemetryChannel::GeneratedPower,
        TelemetryChannel::ConsumedPower,
        TelemetryChannel::Battery,
        TelemetryChannel::Roll,
        TelemetryChannel::Pitch,
        TelemetryChannel::TempInternal,
        TelemetryChannel::TempExternal,
        TelemetryChannel::WheelSpeed,
        TelemetryChannel::Memory,
    ];

    pub fn column(&self) -> &'static str {
        match self {
            TelemetryChannel::GeneratedPower => "Gen_Power",
            TelemetryChannel::ConsumedPower => "Cons_Power",
            TelemetryChannel::Battery => "Battery",
            TelemetryChannel::Roll => "Roll",
            TelemetryChannel::Pitch => "Pitch",
            TelemetryChannel::TempInternal => "Temp_In",
            TelemetryChannel::TempExternal => "Temp_Ex",
            TelemetryChannel::WheelSpeed => "RW_Speed",
            TelemetryChannel::Memory => "Mem_Usage",
        }
    }

    pub fn value(&self, sample: &TelemetrySample) -> f64 {
        match self {
            TelemetryChannel::GeneratedPower => sample.generated_power,
            TelemetryChannel::ConsumedPower => sample.consumed_power,
            TelemetryChannel::Battery => sample.battery_pct,
            TelemetryChannel::Roll => sample.roll,
            TelemetryChannel::Pitch => sample.pitch,
            TelemetryChannel::TempInternal => sample.temp_internal,
            TelemetryChannel::TempExternal => sample.temp_external,
            TelemetryChannel::WheelSpeed => sample.reaction_wheel_speed,
            TelemetryChannel::Memory => sample.recorder_memory_pct,
        }
    }

    pub fn series(&self, samples: &[TelemetrySample]) -> Vec<f64> {
        samples.iter().map(|sample| self.value(sample)).collect()
    }
}

impl fmt::Display for TelemetryChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Writes a header row followed by one row per sample.
pub fn write_csv<W: io::Write>(samples: &[TelemetrySample], writer: W) -> SimResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for sample in samples {
        csv_writer.serialize(sample)?;
    }
    if samples.is_empty() {
        csv_writer.write_record(CSV_HEADER)?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn to_csv_string(samples: &[TelemetrySample]) -> SimResult<String> {
    let mut buffer = Vec::new();
    write_csv(samples, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

const CSV_HEADER: [&str; 10] = [
    "Time",
    "Gen_Power",
    "Cons_Power",
    "Battery",
    "Roll",
    "Pitch",
    "Temp_In",
    "Temp_Ex",
    "RW_Speed",
    "Mem_Usage",
];
