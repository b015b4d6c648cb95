use crate::workflow::runner::WorkflowResult;
use satsimcore::math::MatrixHelper;
use satsimcore::prelude::GeoPoint;
use satsimcore::telemetry::{Alarm, TelemetryMode, TelemetrySample};
use satsimcore::visibility::{GroundStation, PassReport};
use satsimcore::SatelliteState;
use serde::{Deserialize, Serialize};

/// One animation frame: the state plus the rotated sensor axis for the pose view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassFrame {
    #[serde(flatten)]
    pub state: SatelliteState,
    pub boresight: [f64; 3],
}

impl From<&SatelliteState> for PassFrame {
    fn from(state: &SatelliteState) -> Self {
        let axis = MatrixHelper::boresight(state.roll, state.pitch);
        Self {
            state: *state,
            boresight: [axis[0], axis[1], axis[2]],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PassView {
    pub target_name: String,
    pub target: Option<GeoPoint>,
    pub frames: Vec<PassFrame>,
    pub track_segments: Vec<Vec<GeoPoint>>,
    pub stations: Vec<GroundStation>,
    pub report: Option<PassReport>,
    pub wait_minutes: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TelemetryView {
    pub mode: TelemetryMode,
    pub seed: u64,
    pub samples: Vec<TelemetrySample>,
    pub alarms: Vec<Alarm>,
}

/// Latest results published to the HTTP bridge.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VisualizationModel {
    pub pass: PassView,
    pub telemetry: TelemetryView,
}

impl VisualizationModel {
    pub fn from_result(result: &WorkflowResult, stations: &[GroundStation]) -> Self {
        Self {
            pass: PassView {
                target_name: result.target_name.clone(),
                target: Some(result.target.position()),
                frames: result.states.iter().map(PassFrame::from).collect(),
                track_segments: result.track_segments.clone(),
                stations: stations.to_vec(),
                report: Some(result.report.clone()),
                wait_minutes: result.report.wait_minutes(),
            },
            telemetry: TelemetryView {
                mode: result.mode,
                seed: result.seed,
                samples: result.telemetry.clone(),
                alarms: result.alarms.clone(),
            },
        }
    }
}
