use crate::prelude::GeoPoint;

/// Longitude jump between consecutive points treated as a dateline crossing.
pub const DATELINE_JUMP_DEG: f64 = 300.0;

/// Splits a sampled ground track into segments that never cross the map edge.
pub fn split_at_dateline(points: &[GeoPoint]) -> Vec<Vec<GeoPoint>> {
    let mut segments: Vec<Vec<GeoPoint>> = Vec::new();
    let mut current: Vec<GeoPoint> = Vec::new();

    for point in points {
        if let Some(prev) = current.last() {
            if (point.lon - prev.lon).abs() > DATELINE_JUMP_DEG {
                segments.push(std::mem::take(&mut current));
            }
        }
        current.push(*point);
    }
    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continuous_track_is_one_segment() {
        let points: Vec<_> = (0..5).map(|i| GeoPoint::new(0.0, i as f64)).collect();
        assert_eq!(split_at_dateline(&points).len(), 1);
    }

    #[test]
    fn crossing_starts_new_segment() {
        let points = vec![
            GeoPoint::new(0.0, 170.0),
            GeoPoint::new(1.0, 176.0),
            GeoPoint::new(2.0, -178.0),
            GeoPoint::new(3.0, -172.0),
        ];
        let segments = split_at_dateline(&points);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].len(), 2);
        assert_eq!(segments[1][0].lon, -178.0);
    }

    #[test]
    fn empty_track_has_no_segments() {
        assert!(split_at_dateline(&[]).is_empty());
    }
}
