use glam::Vec3;

use crate::core::light::PointLight;
use crate::core::selector::NearbyLights;
use crate::math::AABB;
use crate::scene::LightBank;

/// How far past its falloff end a light may sit and still be considered.
/// Keeps a big torch a few steps away ranked instead of dropped outright.
pub const RANGE_CUTOFF_MARGIN: f32 = 560.0;

/// Ranking distance fed to the selection list.
///
/// The raw metric units are world units either way; `FalloffAdjusted` folds
/// the light's reach into the ranking so a large light brushing the subject
/// beats a small light that happens to have a nearer center.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DistanceMetric {
    /// Plain Euclidean distance from subject to light center
    Euclidean,
    /// `max(distance - falloff_end, 0)`: distance to the light's reach
    #[default]
    FalloffAdjusted,
}

impl DistanceMetric {
    /// Ranking distance for one candidate, or None when the light is out of
    /// considering range for the subject.
    pub fn measure(self, subject: Vec3, light: &PointLight) -> Option<f32> {
        let dist = subject.distance(light.position);
        if dist > light.falloff_end + RANGE_CUTOFF_MARGIN {
            return None;
        }
        let ranked = match self {
            DistanceMetric::Euclidean => dist,
            DistanceMetric::FalloffAdjusted => (dist - light.falloff_end).max(0.0),
        };
        Some(ranked)
    }
}

/// One selection pass: clear the list, then offer every eligible scene light.
///
/// The subject position is typically an animated object's origin. The list
/// afterwards holds the up-to-capacity best candidates, closest first, ready
/// for the mesh lighting evaluator.
pub fn select_nearby(
    bank: &LightBank,
    subject: Vec3,
    metric: DistanceMetric,
    selection: &mut NearbyLights,
) {
    selection.clear();

    for (id, light) in bank.iter_active() {
        // axis-aligned reject before paying for the sqrt
        let reach = light.falloff_end + RANGE_CUTOFF_MARGIN;
        if !AABB::from_center_extent(light.position, reach).contains(subject) {
            continue;
        }
        if let Some(dist) = metric.measure(subject, light) {
            selection.insert(id, dist);
        }
    }
}
