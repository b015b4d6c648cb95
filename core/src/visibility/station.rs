use crate::prelude::{ensure_finite, ensure_latitude, ensure_longitude, GeoPoint, SimError, SimResult};
use serde::{Deserialize, Serialize};

pub const DEFAULT_VISIBILITY_RADIUS_DEG: f64 = 20.0;

/// Operator grouping of a station, used for colouring and listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StationCategory {
    #[default]
    Domestic,
    Polar,
    Overseas,
}

/// Downlink station with a flat circular contact area on the lat/lon map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StationRecord", into = "StationRecord")]
pub struct GroundStation {
    name: String,
    lat: f64,
    lon: f64,
    visibility_radius_deg: f64,
    category: StationCategory,
}

impl GroundStation {
    pub fn new(
        name: impl Into<String>,
        lat: f64,
        lon: f64,
        category: StationCategory,
    ) -> SimResult<Self> {
        Self::with_radius(name, lat, lon, DEFAULT_VISIBILITY_RADIUS_DEG, category)
    }

    pub fn with_radius(
        name: impl Into<String>,
        lat: f64,
        lon: f64,
        visibility_radius_deg: f64,
        category: StationCategory,
    ) -> SimResult<Self> {
        let name = name.into();
        let radius = ensure_finite("visibility_radius_deg", visibility_radius_deg)?;
        if radius < 0.0 {
            return Err(SimError::invalid(
                "visibility_radius_deg",
                radius,
                "radius must not be negative",
            ));
        }
        Ok(Self {
            lat: ensure_latitude("latitude", lat)?,
            lon: ensure_longitude("longitude", lon)?,
            name,
            visibility_radius_deg: radius,
            category,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn latitude(&self) -> f64 {
        self.lat
    }

    pub fn longitude(&self) -> f64 {
        self.lon
    }

    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }

    pub fn visibility_radius_deg(&self) -> f64 {
        self.visibility_radius_deg
    }

    pub fn category(&self) -> StationCategory {
        self.category
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StationRecord {
    name: String,
    lat: f64,
    lon: f64,
    #[serde(default = "default_radius")]
    visibility_radius_deg: f64,
    #[serde(default)]
    category: StationCategory,
}

fn default_radius() -> f64 {
    DEFAULT_VISIBILITY_RADIUS_DEG
}

impl TryFrom<StationRecord> for GroundStation {
    type Error = SimError;

    fn try_from(record: StationRecord) -> SimResult<Self> {
        GroundStation::with_radius(
            record.name,
            record.lat,
            record.lon,
            record.visibility_radius_deg,
            record.category,
        )
    }
}

impl From<GroundStation> for StationRecord {
    fn from(station: GroundStation) -> Self {
        Self {
            name: station.name,
            lat: station.lat,
            lon: station.lon,
            visibility_radius_deg: station.visibility_radius_deg,
            category: station.category,
        }
    }
}
