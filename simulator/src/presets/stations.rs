use satsimcore::visibility::{GroundStation, StationCategory};

const STATIONS: [(&str, f64, f64, StationCategory); 6] = [
    ("Tsukuba", 36.06, 140.12, StationCategory::Domestic),
    ("Katsuura", 35.15, 140.30, StationCategory::Domestic),
    ("Okinawa", 26.50, 127.85, StationCategory::Domestic),
    ("Svalbard", 78.22, 15.40, StationCategory::Polar),
    ("Santiago", -33.15, -70.66, StationCategory::Overseas),
    ("Maspalomas", 27.76, -15.63, StationCategory::Overseas),
];

/// Built-in downlink network, in priority order.
pub fn default_stations() -> Vec<GroundStation> {
    STATIONS
        .iter()
        .map(|(name, lat, lon, category)| {
            GroundStation::new(*name, *lat, *lon, *category)
                .unwrap_or_else(|err| panic!("built-in station {name} is invalid: {err}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_network_has_six_stations_in_order() {
        let stations = default_stations();
        assert_eq!(stations.len(), 6);
        assert_eq!(stations[0].name(), "Tsukuba");
        assert_eq!(stations[3].category(), StationCategory::Polar);
        assert!(stations.iter().all(|s| s.visibility_radius_deg() == 20.0));
    }

    #[test]
    fn every_builtin_entry_survives_validation() {
        let names: Vec<_> = default_stations()
            .iter()
            .map(|station| station.name().to_string())
            .collect();
        let expected: Vec<_> = STATIONS.iter().map(|(name, ..)| name.to_string()).collect();
        assert_eq!(names, expected);
        for (name, lat, lon, category) in STATIONS {
            assert!(GroundStation::new(name, lat, lon, category).is_ok(), "{name}");
        }
    }
}
