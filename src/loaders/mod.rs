pub mod json;

pub use json::{load_light_rig, LightDef, LightRigFile};
