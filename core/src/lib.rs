//! Simulation core for the satellite operations trainer.
//!
//! A toy imaging satellite is flown past a ground target: a closed-form orbit
//! gives the sub-point, a proportional pointing law gives roll/pitch around the
//! capture instant, and a flat lat/lon contact test decides which ground
//! stations see the pass (or when the next contact comes). Independently, a
//! seeded recurrence synthesises bus telemetry and a threshold scan turns it
//! into alarms. Nothing here does I/O beyond writing CSV into a caller-supplied
//! writer, and no module keeps process-wide state.

pub mod attitude;
pub mod diagnostics;
pub mod math;
pub mod orbit;
pub mod pass;
pub mod prelude;
pub mod telemetry;
pub mod visibility;

pub use attitude::{attitude, Attitude, TaskStatus};
pub use orbit::orbit_state;
pub use pass::{PassSimulation, PassWindow, SatelliteState};
pub use prelude::{GeoPoint, GroundTarget, SimError, SimResult};
pub use telemetry::{
    generate_telemetry, scan_alarms, Alarm, AlarmKind, TelemetryMode, TelemetrySample,
};
pub use visibility::{
    pass_visibility, predict_next_downlink, DownlinkForecast, GroundStation, PassReport,
    StationCategory,
};
