pub mod model;
pub mod track;

pub use model::{orbit_state, OrbitModel};
pub use track::{split_at_dateline, DATELINE_JUMP_DEG};
