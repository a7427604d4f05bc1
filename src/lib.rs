pub mod cli;
pub mod core;
pub mod loaders;
pub mod math;
pub mod scene;
pub mod scenes;
pub mod types;

pub use crate::core::light::{LightId, PointLight};
pub use crate::core::pass::{select_nearby, DistanceMetric, RANGE_CUTOFF_MARGIN};
pub use crate::core::selector::{Candidate, NearbyLights, MAX_SELECTED_LIGHTS};
pub use crate::scene::LightBank;

// Re-export rig builders so the demo binary and benches can grab them directly
pub use scenes::{create_corridor_rig, create_ring_rig, create_scattered_rig};
