pub mod locations;
pub mod stations;

pub use locations::{find_location, LocationPreset, Region, DEFAULT_TARGET, LOCATIONS};
pub use stations::default_stations;
