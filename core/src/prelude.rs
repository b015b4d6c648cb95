use serde::{Deserialize, Serialize};

/// Common error type for the simulation core.
#[derive(thiserror::Error, Debug)]
pub enum SimError {
    #[error("invalid input for `{field}` ({value}): {reason}")]
    InvalidInput {
        field: String,
        value: f64,
        reason: &'static str,
    },
    #[error("telemetry export failed: {0}")]
    Export(#[from] csv::Error),
}

pub type SimResult<T> = Result<T, SimError>;

impl SimError {
    pub fn invalid(field: impl Into<String>, value: f64, reason: &'static str) -> Self {
        SimError::InvalidInput {
            field: field.into(),
            value,
            reason,
        }
    }

    /// Name of the offending field for validation failures.
    pub fn field(&self) -> Option<&str> {
        match self {
            SimError::InvalidInput { field, .. } => Some(field),
            SimError::Export(_) => None,
        }
    }
}

pub fn ensure_finite(field: &str, value: f64) -> SimResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SimError::invalid(field, value, "must be a finite number"))
    }
}

pub fn ensure_latitude(field: &str, value: f64) -> SimResult<f64> {
    let value = ensure_finite(field, value)?;
    if (-90.0..=90.0).contains(&value) {
        Ok(value)
    } else {
        Err(SimError::invalid(field, value, "latitude must lie in [-90, 90]"))
    }
}

pub fn ensure_longitude(field: &str, value: f64) -> SimResult<f64> {
    let value = ensure_finite(field, value)?;
    if value > -180.0 && value <= 180.0 {
        Ok(value)
    } else {
        Err(SimError::invalid(
            field,
            value,
            "longitude must lie in (-180, 180]",
        ))
    }
}

/// Upper bound on the number of points in any sampled time grid.
pub const MAX_GRID_SAMPLES: usize = 1_000_000;

/// Point count of the inclusive grid `start, start + step, ..., <= end`.
pub fn grid_sample_count(start: f64, end: f64, step: f64) -> SimResult<usize> {
    ensure_finite("start", start)?;
    ensure_finite("end", end)?;
    ensure_finite("step", step)?;
    if step <= 0.0 {
        return Err(SimError::invalid("step", step, "step must be positive"));
    }
    if end < start {
        return Err(SimError::invalid(
            "end",
            end,
            "window must not end before it starts",
        ));
    }
    let too_many = || SimError::invalid("step", step, "window holds too many samples");
    let intervals = ((end - start) / step + 1e-9).floor();
    if !intervals.is_finite() || intervals >= MAX_GRID_SAMPLES as f64 {
        return Err(too_many());
    }
    (intervals as usize).checked_add(1).ok_or_else(too_many)
}

/// Latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn validate(&self) -> SimResult<()> {
        ensure_latitude("latitude", self.lat)?;
        ensure_longitude("longitude", self.lon)?;
        Ok(())
    }
}

/// Fixed ground location a simulation run is tasked against.
///
/// Only constructible through [`GroundTarget::new`] (or deserialization, which
/// goes through the same checks), so every model can treat it as valid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GeoPoint", into = "GeoPoint")]
pub struct GroundTarget {
    lat: f64,
    lon: f64,
}

impl GroundTarget {
    pub fn new(lat: f64, lon: f64) -> SimResult<Self> {
        Ok(Self {
            lat: ensure_latitude("latitude", lat)?,
            lon: ensure_longitude("longitude", lon)?,
        })
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
}

impl TryFrom<GeoPoint> for GroundTarget {
    type Error = SimError;

    fn try_from(point: GeoPoint) -> SimResult<Self> {
        GroundTarget::new(point.lat, point.lon)
    }
}

impl From<GroundTarget> for GeoPoint {
    fn from(target: GroundTarget) -> Self {
        target.position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_rejects_out_of_range_latitude() {
        let err = GroundTarget::new(91.0, 0.0).unwrap_err();
        assert_eq!(err.field(), Some("latitude"));
    }

    #[test]
    fn target_rejects_longitude_outside_half_open_range() {
        assert!(GroundTarget::new(0.0, 180.0).is_ok());
        let err = GroundTarget::new(0.0, -180.0).unwrap_err();
        assert_eq!(err.field(), Some("longitude"));
        assert!(GroundTarget::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn grid_count_is_bounded() {
        assert_eq!(grid_sample_count(-40.0, 40.0, 2.0).unwrap(), 41);
        assert_eq!(grid_sample_count(5.0, 5.0, 1.0).unwrap(), 1);

        let err = grid_sample_count(-1e300, 1e300, 1.0).unwrap_err();
        assert_eq!(err.field(), Some("step"));
        let err = grid_sample_count(0.0, 1e9, 1e-6).unwrap_err();
        assert_eq!(err.field(), Some("step"));
        let err = grid_sample_count(-f64::MAX, f64::MAX, 1e-300).unwrap_err();
        assert_eq!(err.field(), Some("step"));
        assert!(grid_sample_count(0.0, (MAX_GRID_SAMPLES - 1) as f64, 1.0).is_ok());
        assert!(grid_sample_count(0.0, MAX_GRID_SAMPLES as f64, 1.0).is_err());
    }

    #[test]
    fn target_deserialization_is_validated() {
        let ok: GroundTarget = serde_json::from_str(r#"{"lat": 36.0, "lon": 140.0}"#).unwrap();
        assert_eq!(ok.latitude(), 36.0);

        let bad = serde_json::from_str::<GroundTarget>(r#"{"lat": -95.0, "lon": 140.0}"#);
        assert!(bad.is_err());
    }
}
