use satsimcore::prelude::{GroundTarget, SimResult};
use std::fmt;

pub const DEFAULT_TARGET: &str = "Tsukuba Space Center";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Japan,
    AsiaOceania,
    Americas,
    EuropeAfrica,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Region::Japan => "Japan",
            Region::AsiaOceania => "Asia / Oceania",
            Region::Americas => "North / South America",
            Region::EuropeAfrica => "Europe / Africa",
        };
        f.pad(label)
    }
}

/// Named tasking target offered to operators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationPreset {
    pub name: &'static str,
    pub region: Region,
    pub lat: f64,
    pub lon: f64,
}

impl LocationPreset {
    const fn new(name: &'static str, region: Region, lat: f64, lon: f64) -> Self {
        Self {
            name,
            region,
            lat,
            lon,
        }
    }

    pub fn target(&self) -> SimResult<GroundTarget> {
        GroundTarget::new(self.lat, self.lon)
    }
}

pub const LOCATIONS: &[LocationPreset] = &[
    LocationPreset::new("Tsukuba Space Center", Region::Japan, 36.0621, 140.1265),
    LocationPreset::new("Tanegashima Space Center", Region::Japan, 30.4017, 130.9680),
    LocationPreset::new("Tokyo Station", Region::Japan, 35.6812, 139.7671),
    LocationPreset::new("Irohazaka", Region::Japan, 36.7376, 139.5161),
    LocationPreset::new("Mt. Fuji", Region::Japan, 35.3606, 138.7274),
    LocationPreset::new("Sakurajima", Region::Japan, 31.5814, 130.6573),
    LocationPreset::new("Noto Peninsula", Region::Japan, 37.3941, 136.9034),
    LocationPreset::new("Naitai Highland Ranch", Region::Japan, 43.1670, 143.1590),
    LocationPreset::new("Tokyo", Region::AsiaOceania, 35.6895, 139.6917),
    LocationPreset::new("Canberra", Region::AsiaOceania, -35.2809, 149.1300),
    LocationPreset::new("New Delhi", Region::AsiaOceania, 28.6139, 77.2090),
    LocationPreset::new("Washington D.C.", Region::Americas, 38.9072, -77.0369),
    LocationPreset::new("Ottawa", Region::Americas, 45.4215, -75.6972),
    LocationPreset::new("Brasilia", Region::Americas, -15.7975, -47.8919),
    LocationPreset::new("London", Region::EuropeAfrica, 51.5074, -0.1278),
    LocationPreset::new("Paris", Region::EuropeAfrica, 48.8566, 2.3522),
    LocationPreset::new("Cape Town", Region::EuropeAfrica, -33.9249, 18.4241),
    LocationPreset::new("Cairo", Region::EuropeAfrica, 30.0444, 31.2357),
];

/// Case-insensitive lookup by preset name.
pub fn find_location(name: &str) -> Option<&'static LocationPreset> {
    let wanted = name.trim();
    LOCATIONS
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(wanted))
}
