//! Closed-form ground-track approximation for a sun-synchronous-like orbit.
//!
//! The satellite latitude is a 90° sine of the orbital phase and the longitude
//! drifts linearly past the target. Neither is a real inclined-orbit ground
//! track; the shape is only meant to look plausible on a map for a few minutes
//! around the tasking instant. Everything is a pure function of the time
//! offset `t` (seconds, `t = 0` at capture) and the target.

use crate::math::normalize_deg;
use crate::prelude::{ensure_finite, GeoPoint, GroundTarget, SimResult};
use std::f64::consts::PI;

/// Orbital period in seconds (~96 minutes).
pub const ORBIT_PERIOD_S: f64 = 5760.0;
/// Longitude offset of the sub-point from the target at `t = 0`.
pub const LON_OFFSET_DEG: f64 = -2.0;
/// Linear longitude drift of the ground track.
pub const LON_DRIFT_DEG_PER_S: f64 = -0.06;
/// Amplitude of the latitude sinusoid.
pub const LAT_AMPLITUDE_DEG: f64 = 90.0;

#[derive(Debug, Clone, Copy)]
pub struct OrbitModel {
    target: GroundTarget,
    phase_offset: f64,
}

impl OrbitModel {
    pub fn new(target: GroundTarget) -> Self {
        // Align the phase so the sub-point latitude matches the target at t = 0.
        let ratio = (target.latitude() / LAT_AMPLITUDE_DEG).clamp(-1.0, 1.0);
        Self {
            target,
            phase_offset: ratio.asin(),
        }
    }

    pub fn angular_rate() -> f64 {
        2.0 * PI / ORBIT_PERIOD_S
    }

    pub fn target(&self) -> GroundTarget {
        self.target
    }

    /// Sub-point of the satellite `t_seconds` after the tasking instant.
    pub fn state_at(&self, t_seconds: f64) -> GeoPoint {
        let phase = self.phase_offset - Self::angular_rate() * t_seconds;
        let lat = LAT_AMPLITUDE_DEG * phase.sin();
        let lon = normalize_deg(
            self.target.longitude() + LON_OFFSET_DEG + LON_DRIFT_DEG_PER_S * t_seconds,
        );
        GeoPoint::new(lat, lon)
    }
}

/// Sub-point at `t` for `target`.
pub fn orbit_state(t: f64, target: &GroundTarget) -> SimResult<GeoPoint> {
    let t = ensure_finite("time", t)?;
    Ok(OrbitModel::new(*target).state_at(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(lat: f64, lon: f64) -> GroundTarget {
        GroundTarget::new(lat, lon).unwrap()
    }

    #[test]
    fn latitude_matches_target_at_capture() {
        for lat in [-90.0, -61.5, -33.9, 0.0, 12.0, 36.0621, 78.22, 90.0] {
            let state = orbit_state(0.0, &target(lat, 10.0)).unwrap();
            assert!((state.lat - lat).abs() < 1e-9, "{lat} -> {}", state.lat);
        }
    }

    #[test]
    fn longitude_starts_two_degrees_behind_target() {
        let state = orbit_state(0.0, &target(36.0, 140.0)).unwrap();
        assert!((state.lon - 138.0).abs() < 1e-12);
    }

    #[test]
    fn longitude_wraps_across_dateline() {
        let model = OrbitModel::new(target(0.0, -179.0));
        let state = model.state_at(0.0);
        assert!((state.lon - 179.0).abs() < 1e-9);
        for t in (-3000..=3000).step_by(37) {
            let lon = model.state_at(t as f64).lon;
            assert!(lon > -180.0 && lon <= 180.0);
        }
    }

    #[test]
    fn latitude_repeats_after_one_period() {
        let model = OrbitModel::new(target(-35.28, 149.13));
        let a = model.state_at(120.0).lat;
        let b = model.state_at(120.0 + ORBIT_PERIOD_S).lat;
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn latitude_decreases_after_capture_for_northern_target() {
        let model = OrbitModel::new(target(36.0, 140.0));
        assert!(model.state_at(40.0).lat < 36.0);
        assert!(model.state_at(-40.0).lat > 36.0);
    }

    #[test]
    fn non_finite_time_is_rejected() {
        let err = orbit_state(f64::INFINITY, &target(0.0, 0.0)).unwrap_err();
        assert_eq!(err.field(), Some("time"));
    }
}
