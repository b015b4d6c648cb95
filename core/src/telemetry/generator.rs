//! Synthetic bus telemetry.
//!
//! Each sample depends on the battery, temperatures and recorder fill of the
//! previous one. That dependency lives in an explicit [`CarryState`] threaded
//! through [`step`], so a run is a fold over the time grid and any step can be
//! tested by feeding it a known state. Gaussian noise comes from a seeded
//! `StdRng`; the same profile, seed and initial state always give the same
//! samples.

use crate::diagnostics::LogManager;
use crate::prelude::SimResult;
use crate::telemetry::profile::{TelemetryMode, TelemetryProfile};
use crate::telemetry::sample::TelemetrySample;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SEED: u64 = 42;

const SUNLIT_POWER_W: f64 = 180.0;
const SUNLIT_POWER_SIGMA: f64 = 8.0;
const ECLIPSE_POWER_W: f64 = 50.0;
const ECLIPSE_POWER_SIGMA: f64 = 3.0;
const CONSUMED_POWER_SIGMA: f64 = 5.0;

const SUNLIT_TEMP_C: f64 = 80.0;
const ECLIPSE_TEMP_C: f64 = -20.0;
const EXTERNAL_COUPLING: f64 = 0.1;
const INTERNAL_COUPLING: f64 = 0.05;

const WHEEL_BASE_RPM: f64 = 1000.0;
const WHEEL_RPM_PER_DEG: f64 = 100.0;
const MANOEUVRE_ROLL_DEG: f64 = 20.0;
const MANOEUVRE_PITCH_DEG: f64 = 10.0;
const MANOEUVRE_PERIOD: f64 = 10.0;

/// Values that propagate from one telemetry sample to the next.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarryState {
    pub battery_pct: f64,
    pub temp_internal: f64,
    pub temp_external: f64,
    pub memory_pct: f64,
}

impl Default for CarryState {
    fn default() -> Self {
        Self {
            battery_pct: 80.0,
            temp_internal: 25.0,
            temp_external: 30.0,
            memory_pct: 10.0,
        }
    }
}

fn gaussian<R: Rng + ?Sized>(rng: &mut R, mean: f64, sigma: f64) -> f64 {
    match Normal::new(mean, sigma) {
        Ok(normal) => normal.sample(rng),
        Err(_) => mean,
    }
}

/// Advances the carry-state by one sample at time `t`.
///
/// Noise is drawn in a fixed order: generated power, consumed power, then
/// wheel speed when no pointing manoeuvre is active.
pub fn step<R: Rng + ?Sized>(
    profile: &TelemetryProfile,
    carry: CarryState,
    t: f64,
    rng: &mut R,
) -> (CarryState, TelemetrySample) {
    let eclipse = profile.is_eclipse(t);

    let generated_power = if eclipse {
        gaussian(rng, ECLIPSE_POWER_W, ECLIPSE_POWER_SIGMA)
    } else {
        gaussian(rng, SUNLIT_POWER_W, SUNLIT_POWER_SIGMA)
    };
    let consumed_power = gaussian(rng, profile.consumed_power_w, CONSUMED_POWER_SIGMA);

    let battery_pct = (carry.battery_pct
        + (generated_power - consumed_power) * profile.battery_gain)
        .clamp(0.0, 100.0);

    let pointing = profile
        .pointing
        .map(|window| window.contains(t))
        .unwrap_or(false);
    let (roll, pitch, reaction_wheel_speed) = if pointing {
        let roll = (t / MANOEUVRE_PERIOD).sin() * MANOEUVRE_ROLL_DEG;
        let pitch = (t / MANOEUVRE_PERIOD).cos() * MANOEUVRE_PITCH_DEG;
        (roll, pitch, WHEEL_BASE_RPM + roll.abs() * WHEEL_RPM_PER_DEG)
    } else {
        (
            0.0,
            0.0,
            gaussian(rng, WHEEL_BASE_RPM, profile.wheel_noise_rpm),
        )
    };

    let target_temp = if eclipse { ECLIPSE_TEMP_C } else { SUNLIT_TEMP_C };
    let temp_external = carry.temp_external
        + (target_temp - carry.temp_external) * profile.thermal_lag * EXTERNAL_COUPLING;
    let temp_internal = carry.temp_internal
        + (temp_external - carry.temp_internal) * profile.thermal_lag * INTERNAL_COUPLING;

    let phase = profile.phase(t);
    let mut memory_pct = carry.memory_pct;
    if profile.memory_fill.contains(phase) {
        memory_pct += profile.memory_fill_rate;
    }
    if profile.memory_drain.contains(phase) {
        memory_pct -= profile.memory_drain_rate;
    }
    let memory_pct = memory_pct.clamp(0.0, 100.0);

    let next = CarryState {
        battery_pct,
        temp_internal,
        temp_external,
        memory_pct,
    };
    let sample = TelemetrySample {
        time: t,
        generated_power,
        consumed_power,
        battery_pct,
        roll,
        pitch,
        temp_internal,
        temp_external,
        reaction_wheel_speed,
        recorder_memory_pct: memory_pct,
    };
    (next, sample)
}

/// Reproducible telemetry run for one profile.
#[derive(Debug, Clone)]
pub struct TelemetryGenerator {
    profile: TelemetryProfile,
    seed: u64,
    initial: CarryState,
    logger: LogManager,
}

impl TelemetryGenerator {
    pub fn new(mode: TelemetryMode) -> Self {
        Self::build(TelemetryProfile::for_mode(mode))
    }

    /// Generator for a custom profile; the grid and cycle are checked up front.
    pub fn from_profile(profile: TelemetryProfile) -> SimResult<Self> {
        profile.validate()?;
        Ok(Self::build(profile))
    }

    fn build(profile: TelemetryProfile) -> Self {
        Self {
            profile,
            seed: DEFAULT_SEED,
            initial: CarryState::default(),
            logger: LogManager::new("telemetry"),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_initial_state(mut self, initial: CarryState) -> Self {
        self.initial = initial;
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn profile(&self) -> &TelemetryProfile {
        &self.profile
    }

    pub fn run(&self) -> SimResult<Vec<TelemetrySample>> {
        let times = self.profile.times()?;
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut carry = self.initial;
        let mut samples = Vec::with_capacity(times.size_hint().0);

        for t in times {
            let (next, sample) = step(&self.profile, carry, t, &mut rng);
            carry = next;
            samples.push(sample);
        }

        self.logger.record(&format!(
            "{} run (seed {}) produced {} samples, final battery {:.1}%",
            self.profile.mode,
            self.seed,
            samples.len(),
            carry.battery_pct
        ));
        Ok(samples)
    }
}

pub fn generate_telemetry(mode: TelemetryMode, seed: u64) -> SimResult<Vec<TelemetrySample>> {
    TelemetryGenerator::new(mode).with_seed(seed).run()
}
