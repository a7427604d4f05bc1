use glam::Vec3;

use crate::core::light::PointLight;
use crate::math::hsv_to_rgb;
use crate::scene::LightBank;
use crate::scenes::common::hash_unit;

/// Lights scattered across a large open area, deterministic across runs.
/// Stress rig: with counts well above the selection capacity, every pass has
/// to evict.
pub fn create_scattered_rig(count: usize, extent: f32) -> LightBank {
    let mut bank = LightBank::new();

    for i in 0..count {
        let position = Vec3::new(
            (hash_unit(i, 0) - 0.5) * extent,
            hash_unit(i, 1) * 8.0,
            (hash_unit(i, 2) - 0.5) * extent,
        );
        let range = 6.0 + hash_unit(i, 3) * 14.0;
        let color = hsv_to_rgb(hash_unit(i, 1), 0.7, 0.9);

        bank.add(PointLight::new(position, range * 0.2, range, color));
    }

    bank
}
