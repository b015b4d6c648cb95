use crate::prelude::GeoPoint;

/// Wraps an angle in degrees into (-180, 180].
pub fn normalize_deg(angle: f64) -> f64 {
    let wrapped = (angle + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped <= -180.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// Straight-line distance between two points measured in raw degrees.
///
/// This is a flat lat/lon metric, not a great-circle distance: longitude
/// degrees are not shrunk towards the poles, so a fixed radius covers a
/// much smaller area at high latitude than it does on the map.
pub fn planar_distance_deg(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = a.lat - b.lat;
    let d_lon = a.lon - b.lon;
    (d_lat * d_lat + d_lon * d_lon).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_keeps_values_in_half_open_range() {
        assert_eq!(normalize_deg(138.0), 138.0);
        assert_eq!(normalize_deg(180.0), 180.0);
        assert_eq!(normalize_deg(-180.0), 180.0);
        assert_eq!(normalize_deg(190.0), -170.0);
        assert_eq!(normalize_deg(-190.0), 170.0);
        assert_eq!(normalize_deg(540.0), 180.0);
        for step in -2000..2000 {
            let wrapped = normalize_deg(step as f64 * 0.73);
            assert!(wrapped > -180.0 && wrapped <= 180.0, "{wrapped}");
        }
    }

    #[test]
    fn planar_distance_ignores_meridian_convergence() {
        let a = GeoPoint::new(80.0, 0.0);
        let b = GeoPoint::new(80.0, 10.0);
        assert_eq!(planar_distance_deg(a, b), 10.0);
        let c = GeoPoint::new(3.0, 4.0);
        assert_eq!(planar_distance_deg(GeoPoint::new(0.0, 0.0), c), 5.0);
    }
}
