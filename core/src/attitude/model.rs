//! Commanded pointing around the tasking instant.

use crate::math::normalize_deg;
use crate::prelude::{ensure_finite, GeoPoint, GroundTarget, SimResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Half-width of the window in which pointing is actively commanded.
pub const POINTING_WINDOW_S: f64 = 40.0;
/// Gimbal/actuator limit applied to both axes.
pub const MAX_ANGLE_DEG: f64 = 45.0;
/// Fixed look-ahead scale of the proportional pointing law (not a distance).
pub const LOOK_AHEAD: f64 = 10.0;
/// Proportional gain applied to the look-ahead angle.
pub const POINTING_GAIN: f64 = 2.0;

const CAPTURE_HALF_WIDTH_S: f64 = 2.0;
const ACQUISITION_HALF_WIDTH_S: f64 = 20.0;

/// Operational phase of the satellite relative to the tasking event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "CAPTURING")]
    Capturing,
    #[serde(rename = "PREV TASK")]
    PrevTask,
    #[serde(rename = "NEXT TASK")]
    NextTask,
    #[serde(rename = "TARGET ACQ")]
    TargetAcq,
}

impl TaskStatus {
    /// Total over all time offsets; `NaN` falls through to `TargetAcq`.
    pub fn classify(t_seconds: f64) -> Self {
        if t_seconds.abs() <= CAPTURE_HALF_WIDTH_S {
            TaskStatus::Capturing
        } else if t_seconds < -ACQUISITION_HALF_WIDTH_S {
            TaskStatus::PrevTask
        } else if t_seconds > ACQUISITION_HALF_WIDTH_S {
            TaskStatus::NextTask
        } else {
            TaskStatus::TargetAcq
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Capturing => "CAPTURING",
            TaskStatus::PrevTask => "PREV TASK",
            TaskStatus::NextTask => "NEXT TASK",
            TaskStatus::TargetAcq => "TARGET ACQ",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Attitude {
    pub roll: f64,
    pub pitch: f64,
    pub status: TaskStatus,
}

#[derive(Debug, Clone, Copy)]
pub struct AttitudeModel {
    target: GroundTarget,
}

impl AttitudeModel {
    pub fn new(target: GroundTarget) -> Self {
        Self { target }
    }

    /// Roll/pitch in degrees; zero outside the pointing window (cruise).
    pub fn angles_at(&self, t_seconds: f64, sub_point: GeoPoint) -> (f64, f64) {
        if !(-POINTING_WINDOW_S..=POINTING_WINDOW_S).contains(&t_seconds) {
            return (0.0, 0.0);
        }
        let d_lat = self.target.latitude() - sub_point.lat;
        let d_lon = normalize_deg(self.target.longitude() - sub_point.lon);
        let pitch = d_lat.atan2(LOOK_AHEAD).to_degrees() * POINTING_GAIN;
        let roll = d_lon.atan2(LOOK_AHEAD).to_degrees() * POINTING_GAIN;
        (
            roll.clamp(-MAX_ANGLE_DEG, MAX_ANGLE_DEG),
            pitch.clamp(-MAX_ANGLE_DEG, MAX_ANGLE_DEG),
        )
    }

    pub fn attitude_at(&self, t_seconds: f64, sub_point: GeoPoint) -> Attitude {
        let (roll, pitch) = self.angles_at(t_seconds, sub_point);
        Attitude {
            roll,
            pitch,
            status: TaskStatus::classify(t_seconds),
        }
    }
}

/// Commanded attitude at `t` for a satellite above `sat_pos`.
pub fn attitude(t: f64, sat_pos: GeoPoint, target: &GroundTarget) -> SimResult<Attitude> {
    let t = ensure_finite("time", t)?;
    sat_pos.validate()?;
    Ok(AttitudeModel::new(*target).attitude_at(t, sat_pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tsukuba() -> GroundTarget {
        GroundTarget::new(36.0, 140.0).unwrap()
    }

    #[test]
    fn attitude_is_zero_outside_pointing_window() {
        let model = AttitudeModel::new(tsukuba());
        let far = GeoPoint::new(-10.0, 100.0);
        for t in [-1000.0, -40.5, 40.001, 41.0, 3000.0] {
            assert_eq!(model.angles_at(t, far), (0.0, 0.0));
        }
        assert_ne!(model.angles_at(40.0, far), (0.0, 0.0));
    }

    #[test]
    fn attitude_over_target_is_nadir() {
        let result = attitude(0.0, GeoPoint::new(36.0, 140.0), &tsukuba()).unwrap();
        assert_eq!(result.roll, 0.0);
        assert_eq!(result.pitch, 0.0);
        assert_eq!(result.status, TaskStatus::Capturing);
    }

    #[test]
    fn angles_are_clamped_to_gimbal_limit() {
        let model = AttitudeModel::new(tsukuba());
        let (roll, pitch) = model.angles_at(-30.0, GeoPoint::new(-50.0, 100.0));
        assert_eq!(roll, MAX_ANGLE_DEG);
        assert_eq!(pitch, MAX_ANGLE_DEG);
    }

    #[test]
    fn roll_uses_shortest_longitude_difference() {
        let target = GroundTarget::new(0.0, 179.0).unwrap();
        let model = AttitudeModel::new(target);
        // 179 - (-179) is 358 raw, but only -2 degrees the short way round.
        let (roll, _) = model.angles_at(0.0, GeoPoint::new(0.0, -179.0));
        let expected = (2.0f64).atan2(LOOK_AHEAD).to_degrees() * POINTING_GAIN;
        assert!((roll + expected).abs() < 1e-9);
    }

    #[test]
    fn status_partitions_time_axis() {
        assert_eq!(TaskStatus::classify(-2.0), TaskStatus::Capturing);
        assert_eq!(TaskStatus::classify(2.0), TaskStatus::Capturing);
        assert_eq!(TaskStatus::classify(-2.5), TaskStatus::TargetAcq);
        assert_eq!(TaskStatus::classify(-20.0), TaskStatus::TargetAcq);
        assert_eq!(TaskStatus::classify(-20.5), TaskStatus::PrevTask);
        assert_eq!(TaskStatus::classify(20.0), TaskStatus::TargetAcq);
        assert_eq!(TaskStatus::classify(21.0), TaskStatus::NextTask);
        assert_eq!(TaskStatus::classify(f64::NAN), TaskStatus::TargetAcq);
    }

    #[test]
    fn invalid_sub_point_is_rejected() {
        let err = attitude(0.0, GeoPoint::new(120.0, 0.0), &tsukuba()).unwrap_err();
        assert_eq!(err.field(), Some("latitude"));
    }

    #[test]
    fn serialized_status_matches_display_label() {
        for status in [
            TaskStatus::Capturing,
            TaskStatus::PrevTask,
            TaskStatus::NextTask,
            TaskStatus::TargetAcq,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.label()));
            let back: TaskStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
        assert_eq!(
            serde_json::to_string(&TaskStatus::PrevTask).unwrap(),
            "\"PREV TASK\""
        );
    }
}
