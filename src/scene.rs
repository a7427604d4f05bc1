use glam::Vec3;

use crate::core::light::{LightId, PointLight};
use crate::core::pass::{select_nearby, DistanceMetric};
use crate::core::selector::NearbyLights;

/// Owning table of every light in the scene.
///
/// Lights are owned here and referenced everywhere else by `LightId`. The
/// selector never holds a light itself, only handles into this table.
#[derive(Clone, Debug, Default)]
pub struct LightBank {
    lights: Vec<PointLight>,
}

impl LightBank {
    pub fn new() -> Self {
        Self { lights: Vec::new() }
    }

    pub fn with_lights(lights: Vec<PointLight>) -> Self {
        Self { lights }
    }

    pub fn add(&mut self, light: PointLight) -> LightId {
        let id = LightId::new(self.lights.len());
        self.lights.push(light);
        id
    }

    pub fn get(&self, id: LightId) -> Option<&PointLight> {
        if !id.is_valid() {
            return None;
        }
        self.lights.get(id.index())
    }

    pub fn get_mut(&mut self, id: LightId) -> Option<&mut PointLight> {
        if !id.is_valid() {
            return None;
        }
        self.lights.get_mut(id.index())
    }

    pub fn len(&self) -> usize {
        self.lights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    /// Returns false if the handle does not resolve
    pub fn set_enabled(&mut self, id: LightId, enabled: bool) -> bool {
        match self.get_mut(id) {
            Some(light) => {
                light.enabled = enabled;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (LightId, &PointLight)> {
        self.lights
            .iter()
            .enumerate()
            .map(|(i, light)| (LightId::new(i), light))
    }

    /// Lights eligible for dynamic-object lighting this frame
    pub fn iter_active(&self) -> impl Iterator<Item = (LightId, &PointLight)> {
        self.iter().filter(|(_, light)| light.is_candidate())
    }

    /// Run one selection pass for a subject position
    pub fn select_nearby(
        &self,
        subject: Vec3,
        metric: DistanceMetric,
        selection: &mut NearbyLights,
    ) {
        select_nearby(self, subject, metric, selection);
    }
}
