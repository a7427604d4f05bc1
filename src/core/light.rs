use crate::math::AABB;
use glam::Vec3;

/// Non-owning handle into the scene's light table.
///
/// A handle is only meaningful against the `LightBank` it came from, and only
/// for the duration of one selection pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LightId(u32);

impl LightId {
    /// Sentinel for "no light". Never accepted by the selector.
    pub const INVALID: LightId = LightId(u32::MAX);

    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

/// Point light with a linear falloff band between `falloff_start` and
/// `falloff_end` (world units).
#[derive(Copy, Clone, Debug)]
pub struct PointLight {
    pub position: Vec3,
    pub falloff_start: f32,
    pub falloff_end: f32,
    pub color: [f32; 3],
    pub intensity: f32,
    pub enabled: bool,
    /// Whether this light is applied to animated/dynamic geometry at all.
    pub cast_on_dynamic: bool,
}

impl PointLight {
    pub fn new(position: Vec3, falloff_start: f32, falloff_end: f32, color: [f32; 3]) -> Self {
        Self {
            position,
            falloff_start,
            falloff_end,
            color,
            intensity: 1.0,
            enabled: true,
            cast_on_dynamic: true,
        }
    }

    pub fn with_intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity;
        self
    }

    /// Eligible for dynamic-object lighting this frame
    pub fn is_candidate(&self) -> bool {
        self.enabled && self.cast_on_dynamic
    }

    /// Influence volume: everything past `falloff_end` receives nothing
    pub fn bounds(&self) -> AABB {
        AABB::from_center_extent(self.position, self.falloff_end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_id_is_not_valid() {
        assert!(!LightId::INVALID.is_valid());
        assert!(LightId::new(0).is_valid());
        assert!(LightId::new(31).is_valid());
    }

    #[test]
    fn test_id_round_trip() {
        let id = LightId::new(17);
        assert_eq!(id.index(), 17);
    }

    #[test]
    fn test_light_defaults_are_candidates() {
        let light = PointLight::new(Vec3::ZERO, 1.0, 10.0, [1.0, 0.9, 0.7]);
        assert!(light.is_candidate());
        assert_eq!(light.intensity, 1.0);
    }

    #[test]
    fn test_disabled_light_is_not_candidate() {
        let mut light = PointLight::new(Vec3::ZERO, 1.0, 10.0, [1.0, 1.0, 1.0]);
        light.enabled = false;
        assert!(!light.is_candidate());

        light.enabled = true;
        light.cast_on_dynamic = false;
        assert!(!light.is_candidate());
    }

    #[test]
    fn test_bounds_covers_falloff_end() {
        let light = PointLight::new(Vec3::new(5.0, 0.0, 0.0), 1.0, 10.0, [1.0, 1.0, 1.0]);
        let bounds = light.bounds();
        assert!(bounds.contains(Vec3::new(15.0, 0.0, 0.0)));
        assert!(!bounds.contains(Vec3::new(15.1, 0.0, 0.0)));
    }
}
