mod common;
mod corridor;
mod ring;
mod scattered;

pub use corridor::create_corridor_rig;
pub use ring::create_ring_rig;
pub use scattered::create_scattered_rig;
