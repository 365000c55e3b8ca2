use glam::{Vec2, Vec3};
use rayon::prelude::*;

use crate::domain::Scene;
use crate::frame::Frame;
use crate::march::{estimate_normal, march, MarchOutcome};
use crate::math::{gamma_correct, Ray};
use crate::render::settings::{MarchSettings, DEFAULT_GAMMA};
use crate::render::{Camera, Projection, RenderSettings};
use crate::sdf::SceneField;
use crate::shading::shade;

/// Fixed 2x2 sub-pixel pattern.
pub const SAMPLE_OFFSETS: [Vec2; 4] = [
    Vec2::new(-0.25, -0.25),
    Vec2::new(0.25, -0.25),
    Vec2::new(-0.25, 0.25),
    Vec2::new(0.25, 0.25),
];

pub fn render_frame(scene: &Scene, camera: &Camera, width: u32, height: u32) -> Frame {
    render_frame_with(scene, camera, &RenderSettings::new(width, height))
}

pub fn render_frame_with(scene: &Scene, camera: &Camera, settings: &RenderSettings) -> Frame {
    let width = settings.width as usize;
    let height = settings.height as usize;
    let mut pixels = vec![Vec3::ZERO; width * height];
    if pixels.is_empty() {
        return Frame::from_rows(settings.width, settings.height, pixels);
    }

    tracing::debug!(
        scene = %scene.id,
        width,
        height,
        primitives = scene.primitives.len(),
        lights = scene.lights.len(),
        "rendering frame"
    );

    let projection = camera.projection(settings.width, settings.height);
    pixels
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, slot) in row.iter_mut().enumerate() {
                let linear = sample_pixel(scene, &projection, &settings.march, x as u32, y as u32);
                *slot = gamma_correct(linear, settings.gamma);
            }
        });

    Frame::from_rows(settings.width, settings.height, pixels)
}

/// Gamma-corrected colour of pixel `(x, y)`, `y` counted from the bottom row.
pub fn render_pixel(
    scene: &Scene,
    projection: &Projection,
    march_settings: &MarchSettings,
    x: u32,
    y: u32,
) -> Vec3 {
    gamma_correct(
        sample_pixel(scene, projection, march_settings, x, y),
        DEFAULT_GAMMA,
    )
}

fn sample_pixel(
    scene: &Scene,
    projection: &Projection,
    march_settings: &MarchSettings,
    x: u32,
    y: u32,
) -> Vec3 {
    let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
    let accumulated = SAMPLE_OFFSETS.iter().fold(Vec3::ZERO, |acc, offset| {
        acc + trace(scene, projection.ray(center + *offset), march_settings)
    });
    accumulated / SAMPLE_OFFSETS.len() as f32
}

/// Linear radiance along one ray: shaded surface on a hit, background otherwise.
pub fn trace(scene: &Scene, ray: Ray, march_settings: &MarchSettings) -> Vec3 {
    let field = SceneField::from_scene(scene);
    match march(&field, ray, march_settings) {
        MarchOutcome::Hit(hit) => {
            let normal = estimate_normal(&field, hit.point, march_settings.normal_epsilon);
            shade(&hit.surface, &ray, normal, &scene.lights, scene.ambient)
        }
        MarchOutcome::Miss { .. } => scene.background,
    }
}
