pub mod model;

pub use model::{attitude, Attitude, AttitudeModel, TaskStatus};
