use anyhow::{bail, Context, Result};
use glam::Vec3;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::core::light::PointLight;
use crate::scene::LightBank;

/// On-disk light rig: `{ "lights": [ { "position": [x, y, z], ... } ] }`
#[derive(Debug, Deserialize)]
pub struct LightRigFile {
    pub lights: Vec<LightDef>,
}

#[derive(Debug, Deserialize)]
pub struct LightDef {
    pub position: [f32; 3],
    pub falloff_end: f32,
    /// Defaults to half the falloff end
    pub falloff_start: Option<f32>,
    #[serde(default = "default_color")]
    pub color: [f32; 3],
    #[serde(default = "default_intensity")]
    pub intensity: f32,
    #[serde(default = "default_flag")]
    pub enabled: bool,
    #[serde(default = "default_flag")]
    pub cast_on_dynamic: bool,
}

fn default_color() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

fn default_intensity() -> f32 {
    1.0
}

fn default_flag() -> bool {
    true
}

impl LightDef {
    fn into_light(self) -> Result<PointLight> {
        if !self.falloff_end.is_finite() || self.falloff_end <= 0.0 {
            bail!("light falloff_end must be positive, got {}", self.falloff_end);
        }
        let falloff_start = self.falloff_start.unwrap_or(self.falloff_end * 0.5);

        let mut light = PointLight::new(
            Vec3::from_array(self.position),
            falloff_start,
            self.falloff_end,
            self.color,
        )
        .with_intensity(self.intensity);
        light.enabled = self.enabled;
        light.cast_on_dynamic = self.cast_on_dynamic;
        Ok(light)
    }
}

/// Loads a JSON light rig into a bank
pub fn load_light_rig(path: impl AsRef<Path>) -> Result<LightBank> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .context(format!("Failed to read light rig: {:?}", path))?;
    let file: LightRigFile = serde_json::from_str(&text)
        .context(format!("Failed to parse light rig: {:?}", path))?;

    let mut bank = LightBank::new();
    for (i, def) in file.lights.into_iter().enumerate() {
        let light = def
            .into_light()
            .context(format!("Bad light #{} in {:?}", i, path))?;
        bank.add(light);
    }

    log::info!("loaded {} lights from {:?}", bank.len(), path);
    Ok(bank)
}
