use glam::Vec3;

use crate::domain::{Material, Primitive, Scene};

pub const SCENE_ID: &str = "velvet_and_wax";

pub fn build() -> Scene {
    Scene::new(
        SCENE_ID,
        vec![
            Primitive::sphere(
                "velvet",
                Vec3::new(-1.6, 0.0, 4.5),
                0.9,
                Material {
                    roughness: 0.8,
                    sheen: 6.0,
                    sheen_color: Vec3::new(1.0, 0.75, 0.85),
                    ..Material::with_color(Vec3::new(0.45, 0.05, 0.18))
                },
            ),
            Primitive::sphere(
                "wax",
                Vec3::new(0.0, 0.0, 4.5),
                0.9,
                Material {
                    roughness: 0.45,
                    subsurface: 0.8,
                    subsurface_color: Vec3::new(1.0, 0.55, 0.3),
                    ..Material::with_color(Vec3::new(0.95, 0.85, 0.7))
                },
            ),
            Primitive::sphere(
                "brushed_metal",
                Vec3::new(1.6, 0.0, 4.5),
                0.9,
                Material {
                    metallic: 1.0,
                    roughness: 0.35,
                    anisotropy: 0.8,
                    ..Material::with_color(Vec3::new(0.9, 0.78, 0.55))
                },
            ),
        ],
    )
}
