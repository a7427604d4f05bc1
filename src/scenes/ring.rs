use glam::Vec3;
use std::f32::consts::TAU;

use crate::core::light::PointLight;
use crate::math::hsv_to_rgb;
use crate::scene::LightBank;

/// Ring of colored lights around an arena center, like braziers circling a
/// boss room. Good for watching the selection rotate as a subject orbits.
pub fn create_ring_rig(count: usize, radius: f32) -> LightBank {
    let mut bank = LightBank::new();

    for i in 0..count {
        let angle = i as f32 / count as f32 * TAU;
        let position = Vec3::new(angle.cos() * radius, 2.5, angle.sin() * radius);
        let hue = i as f32 / count as f32;
        let color = hsv_to_rgb(hue, 0.6, 1.0);

        bank.add(PointLight::new(position, radius * 0.1, radius * 0.6, color));
    }

    // one big fill light overhead so the selection is never empty at center
    bank.add(
        PointLight::new(
            Vec3::new(0.0, radius, 0.0),
            radius * 0.5,
            radius * 2.0,
            [0.9, 0.9, 1.0],
        )
        .with_intensity(0.4),
    );

    bank
}
