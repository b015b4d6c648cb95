//! Mode-dependent constants of the bus telemetry model.

use crate::prelude::{ensure_finite, grid_sample_count, SimError, SimResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sampling regime of a telemetry run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TelemetryMode {
    /// 80 s around the capture instant at 1 s resolution.
    #[default]
    Event,
    /// One day at 10 min resolution.
    LongTerm,
}

impl fmt::Display for TelemetryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryMode::Event => f.write_str("event"),
            TelemetryMode::LongTerm => f.write_str("long-term"),
        }
    }
}

impl FromStr for TelemetryMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "event" => Ok(TelemetryMode::Event),
            "long-term" | "long_term" | "longterm" => Ok(TelemetryMode::LongTerm),
            other => Err(format!("unknown telemetry mode `{other}`")),
        }
    }
}

/// Closed (or half-open) interval on the phase axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseWindow {
    pub start: f64,
    pub end: f64,
    pub include_end: bool,
}

impl PhaseWindow {
    pub const fn closed(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            include_end: true,
        }
    }

    pub const fn half_open(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            include_end: false,
        }
    }

    pub fn contains(&self, phase: f64) -> bool {
        if self.include_end {
            phase >= self.start && phase <= self.end
        } else {
            phase >= self.start && phase < self.end
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TelemetryProfile {
    pub mode: TelemetryMode,
    pub start: f64,
    pub end: f64,
    pub step: f64,
    /// Cycle length used to fold `t` into an orbit phase; `None` uses `t` as is.
    pub cycle_s: Option<f64>,
    /// Phases with solar generation; everything else is eclipse.
    pub sunlit: PhaseWindow,
    pub consumed_power_w: f64,
    /// State-of-charge change per watt of net power per step.
    pub battery_gain: f64,
    pub thermal_lag: f64,
    /// Target-pointing manoeuvre; outside it the wheels only carry noise.
    pub pointing: Option<PhaseWindow>,
    pub wheel_noise_rpm: f64,
    pub memory_fill: PhaseWindow,
    pub memory_fill_rate: f64,
    pub memory_drain: PhaseWindow,
    pub memory_drain_rate: f64,
}

impl TelemetryProfile {
    pub fn for_mode(mode: TelemetryMode) -> Self {
        match mode {
            TelemetryMode::Event => Self::event(),
            TelemetryMode::LongTerm => Self::long_term(),
        }
    }

    pub fn event() -> Self {
        Self {
            mode: TelemetryMode::Event,
            start: -40.0,
            end: 40.0,
            step: 1.0,
            cycle_s: None,
            sunlit: PhaseWindow::closed(-10.0, 10.0),
            consumed_power_w: 140.0,
            battery_gain: 0.002,
            thermal_lag: 0.1,
            pointing: Some(PhaseWindow::closed(-40.0, 40.0)),
            wheel_noise_rpm: 10.0,
            memory_fill: PhaseWindow::closed(-5.0, 5.0),
            memory_fill_rate: 2.0,
            memory_drain: PhaseWindow::closed(10.0, 20.0),
            memory_drain_rate: 10.0,
        }
    }

    /// ~90 min orbit: 60 min sunlit, 30 min eclipse; observe early, dump after eclipse entry.
    pub fn long_term() -> Self {
        Self {
            mode: TelemetryMode::LongTerm,
            start: 0.0,
            end: 86_400.0,
            step: 600.0,
            cycle_s: Some(5400.0),
            sunlit: PhaseWindow::closed(0.0, 3600.0),
            consumed_power_w: 120.0,
            battery_gain: 0.0002,
            thermal_lag: 0.5,
            pointing: None,
            wheel_noise_rpm: 50.0,
            memory_fill: PhaseWindow::half_open(0.0, 1800.0),
            memory_fill_rate: 0.8,
            memory_drain: PhaseWindow::closed(3600.0, 4200.0),
            memory_drain_rate: 3.0,
        }
    }

    /// Checks the time grid and the orbit cycle length.
    pub fn validate(&self) -> SimResult<()> {
        if let Some(cycle) = self.cycle_s {
            let cycle = ensure_finite("cycle_s", cycle)?;
            if cycle <= 0.0 {
                return Err(SimError::invalid("cycle_s", cycle, "cycle must be positive"));
            }
        }
        self.sample_count().map(|_| ())
    }

    pub fn sample_count(&self) -> SimResult<usize> {
        grid_sample_count(self.start, self.end, self.step)
    }

    pub fn times(&self) -> SimResult<impl Iterator<Item = f64>> {
        let count = self.sample_count()?;
        let (start, step) = (self.start, self.step);
        Ok((0..count).map(move |i| start + i as f64 * step))
    }

    pub fn phase(&self, t: f64) -> f64 {
        match self.cycle_s {
            Some(cycle) => t.rem_euclid(cycle),
            None => t,
        }
    }

    pub fn is_eclipse(&self, t: f64) -> bool {
        !self.sunlit.contains(self.phase(t))
    }
}
