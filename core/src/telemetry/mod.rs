pub mod alarms;
pub mod generator;
pub mod profile;
pub mod sample;

pub use alarms::{scan_alarms, Alarm, AlarmKind, AlarmThresholds};
pub use generator::{generate_telemetry, step, CarryState, TelemetryGenerator, DEFAULT_SEED};
pub use profile::{PhaseWindow, TelemetryMode, TelemetryProfile};
pub use sample::{to_csv_string, write_csv, TelemetryChannel, TelemetrySample};
