use glam::Vec3;

use super::light::{DEFAULT_AMBIENT, DEFAULT_BACKGROUND, DEFAULT_LIGHTS};
use super::{Light, Primitive};

pub const DEFAULT_BLEND_RADIUS: f32 = 1.0;

#[derive(Clone, Debug)]
pub struct Scene {
    pub id: String,
    /// Folded left to right by the smooth blend operator.
    pub primitives: Vec<Primitive>,
    pub lights: Vec<Light>,
    pub blend_radius: f32,
    pub ambient: Vec3,
    pub background: Vec3,
}

impl Scene {
    pub fn new(id: impl Into<String>, primitives: Vec<Primitive>) -> Self {
        Self {
            id: id.into(),
            primitives,
            lights: DEFAULT_LIGHTS.to_vec(),
            blend_radius: DEFAULT_BLEND_RADIUS,
            ambient: DEFAULT_AMBIENT,
            background: DEFAULT_BACKGROUND,
        }
    }
}
