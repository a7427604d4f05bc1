use glam::Vec3;

use crate::core::light::PointLight;
use crate::scene::LightBank;
use crate::scenes::common::torch_color;

const TORCH_SPACING: f32 = 8.0;
const WALL_OFFSET: f32 = 3.0;

/// Dungeon corridor: torch pairs on both walls, every third torch burned out
/// and a handful of decorative lights that do not touch dynamic geometry.
pub fn create_corridor_rig(segments: usize) -> LightBank {
    let mut bank = LightBank::new();

    for segment in 0..segments {
        let z = segment as f32 * TORCH_SPACING;

        for (side_idx, side) in [-WALL_OFFSET, WALL_OFFSET].iter().enumerate() {
            let seed = segment * 2 + side_idx;
            let mut torch = PointLight::new(
                Vec3::new(*side, 2.0, z),
                1.5,
                10.0,
                torch_color(seed, 0.5, 1.0),
            );
            torch.enabled = segment % 3 != 2;
            bank.add(torch);
        }

        // window glow baked into the level, ignored for animated objects
        if segment % 4 == 0 {
            let mut glow = PointLight::new(
                Vec3::new(0.0, 4.5, z + TORCH_SPACING * 0.5),
                2.0,
                6.0,
                [0.4, 0.5, 0.9],
            );
            glow.cast_on_dynamic = false;
            bank.add(glow);
        }
    }

    bank
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corridor_rig_has_two_torches_per_segment() {
        let bank = create_corridor_rig(6);
        let torches = bank
            .iter()
            .filter(|(_, light)| light.cast_on_dynamic)
            .count();
        assert_eq!(torches, 12);
    }

    #[test]
    fn test_corridor_rig_burned_out_torches() {
        let bank = create_corridor_rig(3);
        let dark = bank.iter().filter(|(_, light)| !light.enabled).count();
        assert_eq!(dark, 2, "segment 2 torch pair should be unlit");
    }

    #[test]
    fn test_corridor_rig_window_glow_not_dynamic() {
        let bank = create_corridor_rig(4);
        let glows: Vec<_> = bank
            .iter()
            .filter(|(_, light)| !light.cast_on_dynamic)
            .collect();
        assert_eq!(glows.len(), 1);
        assert!(!bank
            .iter_active()
            .any(|(id, _)| glows.iter().any(|(gid, _)| *gid == id)));
    }
}
