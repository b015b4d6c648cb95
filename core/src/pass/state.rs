use crate::attitude::TaskStatus;
use crate::prelude::{grid_sample_count, GeoPoint, SimResult};
use serde::{Deserialize, Serialize};

/// Satellite sub-point and commanded pose at one sampled time offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SatelliteState {
    pub time: f64,
    pub lat: f64,
    pub lon: f64,
    pub roll: f64,
    pub pitch: f64,
    pub status: TaskStatus,
}

impl SatelliteState {
    pub fn sub_point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

/// Inclusive sampling grid `start, start + step, ..., <= end` in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PassWindow {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl PassWindow {
    pub fn new(start: f64, end: f64, step: f64) -> SimResult<Self> {
        let window = Self { start, end, step };
        window.validate()?;
        Ok(window)
    }

    /// Fine sampling around the tasking event.
    pub fn pass() -> Self {
        Self {
            start: -40.0,
            end: 40.0,
            step: 2.0,
        }
    }

    /// Coarse sampling for the background ground track.
    pub fn background_track() -> Self {
        Self {
            start: -3000.0,
            end: 3000.0,
            step: 60.0,
        }
    }

    pub fn validate(&self) -> SimResult<()> {
        self.sample_count().map(|_| ())
    }

    /// Number of sample times; fails for windows `validate` rejects.
    pub fn sample_count(&self) -> SimResult<usize> {
        grid_sample_count(self.start, self.end, self.step)
    }

    /// Sample times; computed from an index so long grids do not drift.
    pub fn times(&self) -> SimResult<impl Iterator<Item = f64>> {
        let count = self.sample_count()?;
        let (start, step) = (self.start, self.step);
        Ok((0..count).map(move |i| start + i as f64 * step))
    }
}

impl Default for PassWindow {
    fn default() -> Self {
        Self::pass()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pass_window_has_41_samples() {
        let window = PassWindow::pass();
        let times: Vec<f64> = window.times().unwrap().collect();
        assert_eq!(times.len(), 41);
        assert_eq!(times[0], -40.0);
        assert_eq!(times[40], 40.0);
    }

    #[test]
    fn background_window_covers_both_sides() {
        let window = PassWindow::background_track();
        assert_eq!(window.sample_count().unwrap(), 101);
        assert_eq!(window.times().unwrap().last(), Some(3000.0));
    }

    #[test]
    fn window_excludes_partial_final_step() {
        let window = PassWindow::new(0.0, 10.0, 3.0).unwrap();
        let times: Vec<f64> = window.times().unwrap().collect();
        assert_eq!(times, vec![0.0, 3.0, 6.0, 9.0]);
    }

    #[test]
    fn window_validation_names_field() {
        assert_eq!(
            PassWindow::new(0.0, 10.0, 0.0).unwrap_err().field(),
            Some("step")
        );
        assert_eq!(
            PassWindow::new(10.0, 0.0, 1.0).unwrap_err().field(),
            Some("end")
        );
    }

    #[test]
    fn oversized_windows_are_rejected() {
        let err = PassWindow::new(-1e300, 1e300, 1.0).unwrap_err();
        assert_eq!(err.field(), Some("step"));
        let err = PassWindow::new(0.0, 1e9, 1e-6).unwrap_err();
        assert_eq!(err.field(), Some("step"));

        let window = PassWindow {
            start: -1e300,
            end: 1e300,
            step: 1.0,
        };
        assert!(window.sample_count().is_err());
        assert!(window.times().is_err());
    }
}
