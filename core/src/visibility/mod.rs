pub mod engine;
pub mod station;

pub use engine::{
    pass_visibility, predict_next_downlink, DownlinkForecast, PassReport, VisibilityEngine,
    DOWNLINK_SCAN_HORIZON_S, DOWNLINK_SCAN_STEP_S,
};
pub use station::{GroundStation, StationCategory, DEFAULT_VISIBILITY_RADIUS_DEG};
