use glam::Vec3;

use crate::domain::{Material, Primitive, Scene};

pub const SCENE_ID: &str = "twin_spheres";

pub fn build() -> Scene {
    Scene::new(
        SCENE_ID,
        vec![
            Primitive::sphere(
                "blue_sphere",
                Vec3::new(-1.0, 0.0, 4.0),
                1.0,
                Material {
                    roughness: 0.5,
                    ..Material::with_color(Vec3::new(0.0, 0.0, 1.0))
                },
            ),
            Primitive::sphere(
                "red_sphere",
                Vec3::new(1.0, 0.0, 4.0),
                1.0,
                Material {
                    roughness: 0.1,
                    ..Material::with_color(Vec3::new(1.0, 0.0, 0.0))
                },
            ),
        ],
    )
}
