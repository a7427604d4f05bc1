mod aabb;
mod color;

pub use aabb::AABB;
pub use color::{hsv_to_rgb, scale_rgb};
