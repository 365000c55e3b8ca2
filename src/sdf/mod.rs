pub mod blend;
pub mod primitives;

use glam::Vec3;

use crate::domain::{Material, Primitive, Scene};
use blend::{smooth_min, smooth_min_distance};

/// Result of querying the scene field at a point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub distance: f32,
    pub material: Material,
}

impl Surface {
    /// Sample of a scene without primitives: nothing is ever reached.
    pub const EMPTY: Self = Self {
        distance: f32::INFINITY,
        material: Material {
            base_color: Vec3::ZERO,
            metallic: 0.0,
            roughness: 1.0,
            emissive: Vec3::ZERO,
            anisotropy: 0.0,
            subsurface: 0.0,
            subsurface_color: Vec3::ZERO,
            sheen: 0.0,
            sheen_color: Vec3::ZERO,
        },
    };
}

/// Signed distance + material query over an ordered list of primitives.
#[derive(Clone, Copy, Debug)]
pub struct SceneField<'a> {
    primitives: &'a [Primitive],
    blend_radius: f32,
}

impl<'a> SceneField<'a> {
    pub fn new(primitives: &'a [Primitive], blend_radius: f32) -> Self {
        Self {
            primitives,
            blend_radius,
        }
    }

    pub fn from_scene(scene: &'a Scene) -> Self {
        Self::new(&scene.primitives, scene.blend_radius)
    }

    pub fn sample(&self, p: Vec3) -> Surface {
        let mut primitives = self.primitives.iter();
        let Some(first) = primitives.next() else {
            return Surface::EMPTY;
        };

        let first = Surface {
            distance: first.distance(p),
            material: first.material,
        };
        primitives.fold(first, |blended, primitive| {
            let next = Surface {
                distance: primitive.distance(p),
                material: primitive.material,
            };
            smooth_min(&blended, &next, self.blend_radius)
        })
    }

    /// Distance-only fold; agrees with `sample(p).distance`.
    pub fn distance(&self, p: Vec3) -> f32 {
        let mut primitives = self.primitives.iter();
        let Some(first) = primitives.next() else {
            return f32::INFINITY;
        };

        primitives.fold(first.distance(p), |blended, primitive| {
            smooth_min_distance(blended, primitive.distance(p), self.blend_radius).0
        })
    }
}
