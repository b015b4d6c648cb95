use crate::attitude::AttitudeModel;
use crate::diagnostics::LogManager;
use crate::orbit::OrbitModel;
use crate::pass::state::{PassWindow, SatelliteState};
use crate::prelude::{GeoPoint, GroundTarget, SimResult};
use crate::visibility::{GroundStation, PassReport, VisibilityEngine};

/// Propagates one satellite around a tasking event over a fixed target.
pub struct PassSimulation {
    orbit: OrbitModel,
    attitude: AttitudeModel,
    logger: LogManager,
}

impl PassSimulation {
    pub fn new(target: GroundTarget) -> Self {
        Self {
            orbit: OrbitModel::new(target),
            attitude: AttitudeModel::new(target),
            logger: LogManager::new("pass"),
        }
    }

    pub fn target(&self) -> GroundTarget {
        self.orbit.target()
    }

    pub fn orbit(&self) -> &OrbitModel {
        &self.orbit
    }

    pub fn state_at(&self, t_seconds: f64) -> SatelliteState {
        let sub_point = self.orbit.state_at(t_seconds);
        let attitude = self.attitude.attitude_at(t_seconds, sub_point);
        SatelliteState {
            time: t_seconds,
            lat: sub_point.lat,
            lon: sub_point.lon,
            roll: attitude.roll,
            pitch: attitude.pitch,
            status: attitude.status,
        }
    }

    /// Ordered state sequence over `window`.
    pub fn states(&self, window: &PassWindow) -> SimResult<Vec<SatelliteState>> {
        let states: Vec<_> = window.times()?.map(|t| self.state_at(t)).collect();
        self.logger.detail(&format!(
            "sampled {} states over [{:+.0}, {:+.0}]s",
            states.len(),
            window.start,
            window.end
        ));
        Ok(states)
    }

    /// Coarse sub-point track, typically a full orbit either side of the pass.
    pub fn ground_track(&self, window: &PassWindow) -> SimResult<Vec<GeoPoint>> {
        Ok(window.times()?.map(|t| self.orbit.state_at(t)).collect())
    }

    pub fn report(
        &self,
        states: &[SatelliteState],
        stations: &[GroundStation],
        pass_end: f64,
    ) -> PassReport {
        let report = VisibilityEngine::new(stations).report(&self.orbit, states, pass_end);
        match (&report.next_downlink, report.has_contact()) {
            (_, true) => self.logger.record(&format!(
                "pass in contact with {}",
                report.visible_stations.join(", ")
            )),
            (Some(forecast), false) => self.logger.record(&format!(
                "no contact this pass; next downlink {} at t={:+.0}s",
                forecast.station, forecast.time
            )),
            (None, false) => self
                .logger
                .warn("no contact this pass and none within the forecast horizon"),
        }
        report
    }

    /// States plus report for one pass window.
    pub fn run(
        &self,
        window: &PassWindow,
        stations: &[GroundStation],
    ) -> SimResult<(Vec<SatelliteState>, PassReport)> {
        let states = self.states(window)?;
        let report = self.report(&states, stations, window.end);
        Ok((states, report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attitude::TaskStatus;
    use crate::visibility::StationCategory;

    fn tsukuba() -> GroundTarget {
        GroundTarget::new(36.0621, 140.1265).unwrap()
    }

    #[test]
    fn states_are_ordered_and_labelled() {
        let sim = PassSimulation::new(tsukuba());
        let states = sim.states(&PassWindow::pass()).unwrap();
        assert_eq!(states.len(), 41);
        assert!(states.windows(2).all(|pair| pair[0].time < pair[1].time));
        assert_eq!(states[0].status, TaskStatus::PrevTask);
        assert_eq!(states[20].status, TaskStatus::Capturing);
        assert_eq!(states[40].status, TaskStatus::NextTask);
    }

    #[test]
    fn capture_state_points_at_target() {
        let sim = PassSimulation::new(tsukuba());
        let capture = sim.state_at(0.0);
        assert!((capture.lat - 36.0621).abs() < 1e-9);
        // Sub-point trails the target by two degrees of longitude.
        assert!(capture.pitch.abs() < 1e-9);
        assert!(capture.roll > 0.0);
    }

    #[test]
    fn cruise_states_have_zero_attitude() {
        let sim = PassSimulation::new(tsukuba());
        let track = PassWindow::new(-300.0, 300.0, 60.0).unwrap();
        for state in sim.states(&track).unwrap() {
            if state.time.abs() > 40.0 {
                assert_eq!((state.roll, state.pitch), (0.0, 0.0));
            }
        }
    }

    #[test]
    fn ground_track_matches_state_positions() {
        let sim = PassSimulation::new(tsukuba());
        let window = PassWindow::background_track();
        let track = sim.ground_track(&window).unwrap();
        assert_eq!(track.len(), window.sample_count().unwrap());
        let state = sim.state_at(window.start);
        assert_eq!(track[0], state.sub_point());
    }

    #[test]
    fn domestic_station_sees_domestic_pass() {
        let sim = PassSimulation::new(tsukuba());
        let stations = vec![
            GroundStation::new("Tsukuba", 36.06, 140.12, StationCategory::Domestic).unwrap(),
            GroundStation::new("Svalbard", 78.22, 15.40, StationCategory::Polar).unwrap(),
        ];
        let (_, report) = sim.run(&PassWindow::pass(), &stations).unwrap();
        assert_eq!(report.visible_stations, vec!["Tsukuba".to_string()]);
        assert_eq!(report.next_downlink, None);
    }

    #[test]
    fn remote_pass_gets_forecast_after_pass_end() {
        let sim = PassSimulation::new(GroundTarget::new(-35.28, 149.13).unwrap());
        let stations = vec![
            GroundStation::new("Svalbard", 78.22, 15.40, StationCategory::Polar).unwrap(),
            GroundStation::new("Maspalomas", 27.76, -15.63, StationCategory::Overseas).unwrap(),
        ];
        let window = PassWindow::pass();
        let (_, report) = sim.run(&window, &stations).unwrap();
        assert!(!report.has_contact());
        if let Some(forecast) = &report.next_downlink {
            assert!(forecast.time >= window.end);
        }
    }

    #[test]
    fn invalid_window_is_rejected() {
        let sim = PassSimulation::new(tsukuba());
        let window = PassWindow {
            start: 0.0,
            end: 10.0,
            step: -1.0,
        };
        assert!(sim.states(&window).is_err());

        let huge = PassWindow {
            start: 0.0,
            end: 1e9,
            step: 1e-6,
        };
        assert_eq!(sim.ground_track(&huge).unwrap_err().field(), Some("step"));
        assert!(sim.run(&huge, &[]).is_err());
    }
}
