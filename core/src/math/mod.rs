pub mod angles;
pub mod matrix;
pub mod stats;

pub use angles::{normalize_deg, planar_distance_deg};
pub use matrix::MatrixHelper;
pub use stats::{ChannelSummary, StatsHelper};
