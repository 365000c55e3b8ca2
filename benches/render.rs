use criterion::{criterion_group, criterion_main, Criterion};
use glam::Vec3;

use implicit_render::domain::presets::build_scene;
use implicit_render::{render_frame, Camera};

fn bench_twin_spheres(c: &mut Criterion) {
    let scene = build_scene("twin_spheres").expect("preset");
    let camera = Camera::new(Vec3::new(0.0, 0.0, -10.0), Vec3::ZERO);
    c.bench_function("twin_spheres_160x120", |b| {
        b.iter(|| render_frame(&scene, &camera, 160, 120))
    });
}

fn bench_shape_gallery(c: &mut Criterion) {
    let scene = build_scene("shape_gallery").expect("preset");
    let camera = Camera::default();
    c.bench_function("shape_gallery_160x120", |b| {
        b.iter(|| render_frame(&scene, &camera, 160, 120))
    });
}

criterion_group!(benches, bench_twin_spheres, bench_shape_gallery);
criterion_main!(benches);
