use bytemuck::Zeroable;

use crate::core::light::PointLight;
use crate::core::selector::{NearbyLights, MAX_SELECTED_LIGHTS};
use crate::math::scale_rgb;
use crate::scene::LightBank;

/// One selected light, laid out for the mesh lighting shader
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PackedLight {
    pub position: [f32; 3],
    pub falloff_start: f32,
    pub color: [f32; 3],
    pub falloff_end: f32,
}

impl PackedLight {
    pub fn from_light(light: &PointLight) -> Self {
        Self {
            position: light.position.to_array(),
            falloff_start: light.falloff_start,
            // intensity is premultiplied so the shader sees one rgb triple
            color: scale_rgb(light.color, light.intensity),
            falloff_end: light.falloff_end,
        }
    }
}

/// Uniform-buffer view of one selection pass result
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PackedLightList {
    pub lights: [PackedLight; MAX_SELECTED_LIGHTS],
    pub count: u32,
    pub _pad: [u32; 3],
}

impl PackedLightList {
    /// Resolve the selection's handles against the bank and pack them in
    /// order, closest first. Handles that no longer resolve are skipped.
    pub fn from_selection(selection: &NearbyLights, bank: &LightBank) -> Self {
        let mut lights = [PackedLight::zeroed(); MAX_SELECTED_LIGHTS];
        let mut count = 0;

        for candidate in selection.iter().take(MAX_SELECTED_LIGHTS) {
            if let Some(light) = bank.get(candidate.light) {
                lights[count] = PackedLight::from_light(light);
                count += 1;
            }
        }

        Self {
            lights,
            count: count as u32,
            _pad: [0; 3],
        }
    }
}
