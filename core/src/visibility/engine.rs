//! Ground-station contact detection for a simulated pass.
//!
//! Distances are planar in raw lat/lon degrees (see
//! [`planar_distance_deg`](crate::math::planar_distance_deg)), so the contact
//! areas are circles on the map rather than rings on the globe.

use crate::diagnostics::LogManager;
use crate::math::planar_distance_deg;
use crate::orbit::OrbitModel;
use crate::pass::SatelliteState;
use crate::prelude::{ensure_finite, GroundTarget, SimResult};
use crate::visibility::station::GroundStation;
use serde::{Deserialize, Serialize};

/// Spacing of the forward scan for the next contact.
pub const DOWNLINK_SCAN_STEP_S: f64 = 60.0;
/// Forward scan horizon, slightly longer than one orbital period.
pub const DOWNLINK_SCAN_HORIZON_S: f64 = 6000.0;

/// First predicted station contact after a pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownlinkForecast {
    pub time: f64,
    pub station: String,
}

/// Outcome of one simulated pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassReport {
    /// Stations in contact at some point of the pass, in declaration order.
    pub visible_stations: Vec<String>,
    /// Only computed when no station is visible during the pass. `None`
    /// then means "beyond the forecast horizon", not "never".
    pub next_downlink: Option<DownlinkForecast>,
    /// Time offset the forecast scan started from.
    pub pass_end: f64,
}

impl PassReport {
    pub fn has_contact(&self) -> bool {
        !self.visible_stations.is_empty()
    }

    /// Whole minutes between the end of the pass and the forecast contact.
    pub fn wait_minutes(&self) -> Option<u64> {
        self.next_downlink.as_ref().map(|forecast| {
            let wait_s = (forecast.time - self.pass_end).max(0.0);
            (wait_s / 60.0).floor() as u64
        })
    }
}

pub struct VisibilityEngine<'a> {
    stations: &'a [GroundStation],
    logger: LogManager,
}

impl<'a> VisibilityEngine<'a> {
    pub fn new(stations: &'a [GroundStation]) -> Self {
        Self {
            stations,
            logger: LogManager::new("visibility"),
        }
    }

    pub fn stations(&self) -> &'a [GroundStation] {
        self.stations
    }

    /// Closest approach of the sub-point track to `station`, if the track is non-empty.
    pub fn closest_approach(states: &[SatelliteState], station: &GroundStation) -> Option<f64> {
        states
            .iter()
            .map(|state| planar_distance_deg(state.sub_point(), station.position()))
            .reduce(f64::min)
    }

    /// Names of all stations whose contact circle the track enters at least once.
    pub fn pass_visibility(&self, states: &[SatelliteState]) -> Vec<String> {
        self.stations
            .iter()
            .filter(|station| {
                Self::closest_approach(states, station)
                    .map(|distance| distance < station.visibility_radius_deg())
                    .unwrap_or(false)
            })
            .map(|station| station.name().to_string())
            .collect()
    }

    /// First probe at or after `current_time` where any station is in contact.
    ///
    /// Stations are tested in declaration order, so simultaneous entries
    /// resolve to the first-listed station.
    pub fn predict_next_downlink(
        &self,
        orbit: &OrbitModel,
        current_time: f64,
    ) -> Option<DownlinkForecast> {
        let probes = (DOWNLINK_SCAN_HORIZON_S / DOWNLINK_SCAN_STEP_S).ceil() as usize;
        for index in 0..probes {
            let probe_time = current_time + index as f64 * DOWNLINK_SCAN_STEP_S;
            let sub_point = orbit.state_at(probe_time);
            if let Some(station) = self.stations.iter().find(|station| {
                planar_distance_deg(sub_point, station.position())
                    < station.visibility_radius_deg()
            }) {
                self.logger.detail(&format!(
                    "next downlink {} at t={:+.0}s",
                    station.name(),
                    probe_time
                ));
                return Some(DownlinkForecast {
                    time: probe_time,
                    station: station.name().to_string(),
                });
            }
        }
        self.logger.detail(&format!(
            "no contact within {:.0}s of t={:+.0}s",
            DOWNLINK_SCAN_HORIZON_S, current_time
        ));
        None
    }

    /// Pass report: visible stations, or the next contact once the pass ends.
    pub fn report(
        &self,
        orbit: &OrbitModel,
        states: &[SatelliteState],
        pass_end: f64,
    ) -> PassReport {
        let visible_stations = self.pass_visibility(states);
        let next_downlink = if visible_stations.is_empty() {
            self.predict_next_downlink(orbit, pass_end)
        } else {
            None
        };
        PassReport {
            visible_stations,
            next_downlink,
            pass_end,
        }
    }
}

pub fn pass_visibility(states: &[SatelliteState], stations: &[GroundStation]) -> Vec<String> {
    VisibilityEngine::new(stations).pass_visibility(states)
}

pub fn predict_next_downlink(
    current_time: f64,
    target: &GroundTarget,
    stations: &[GroundStation],
) -> SimResult<Option<DownlinkForecast>> {
    let current_time = ensure_finite("time", current_time)?;
    let orbit = OrbitModel::new(*target);
    Ok(VisibilityEngine::new(stations).predict_next_downlink(&orbit, current_time))
}
