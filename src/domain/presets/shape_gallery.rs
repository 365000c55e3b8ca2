use glam::Vec3;

use crate::domain::primitive::{
    DEFAULT_MANDELBULB_BAILOUT, DEFAULT_MANDELBULB_ITERATIONS, DEFAULT_MANDELBULB_POWER,
};
use crate::domain::{Material, Primitive, Scene, Shape};

pub const SCENE_ID: &str = "shape_gallery";

pub fn build() -> Scene {
    let mut scene = Scene::new(
        SCENE_ID,
        vec![
            Primitive {
                name: "floor".into(),
                position: Vec3::new(0.0, -1.2, 0.0),
                shape: Shape::Plane {
                    normal: Vec3::Y,
                    offset: 0.0,
                },
                material: Material {
                    roughness: 0.9,
                    ..Material::with_color(Vec3::new(0.82, 0.82, 0.85))
                },
            },
            Primitive {
                name: "rounded_box".into(),
                position: Vec3::new(-2.4, -0.45, 5.0),
                shape: Shape::RoundedBox {
                    half_extents: Vec3::new(0.6, 0.6, 0.6),
                    radius: 0.12,
                },
                material: Material {
                    roughness: 0.35,
                    ..Material::with_color(Vec3::new(0.85, 0.55, 0.2))
                },
            },
            Primitive::sphere(
                "chrome_sphere",
                Vec3::new(0.0, -0.2, 5.0),
                0.9,
                Material {
                    metallic: 1.0,
                    roughness: 0.15,
                    ..Material::with_color(Vec3::new(0.95, 0.95, 0.97))
                },
            ),
            Primitive {
                name: "mandelbulb".into(),
                position: Vec3::new(2.4, -0.1, 5.0),
                shape: Shape::Mandelbulb {
                    power: DEFAULT_MANDELBULB_POWER,
                    bailout: DEFAULT_MANDELBULB_BAILOUT,
                    iterations: DEFAULT_MANDELBULB_ITERATIONS,
                },
                material: Material {
                    roughness: 0.6,
                    emissive: Vec3::new(0.02, 0.05, 0.08),
                    ..Material::with_color(Vec3::new(0.3, 0.7, 0.9))
                },
            },
        ],
    );
    // Keep the shapes visually distinct; only their contact with the floor fuses.
    scene.blend_radius = 0.3;
    scene
}
