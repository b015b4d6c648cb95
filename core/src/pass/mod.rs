pub mod simulation;
pub mod state;

pub use simulation::PassSimulation;
pub use state::{PassWindow, SatelliteState};
