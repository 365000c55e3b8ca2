//! Closed-form distance functions. Every function takes a point already
//! expressed in the primitive's local frame.

use glam::Vec3;

/// Radius of a sphere enclosing the power-8 Mandelbulb.
const MANDELBULB_BOUNDING_RADIUS: f32 = 1.25;

pub fn sd_sphere(p: Vec3, radius: f32) -> f32 {
    p.length() - radius
}

pub fn sd_plane(p: Vec3, normal: Vec3, offset: f32) -> f32 {
    p.dot(normal.normalize_or_zero()) + offset
}

pub fn sd_rounded_box(p: Vec3, half_extents: Vec3, radius: f32) -> f32 {
    let q = p.abs() - half_extents;
    q.max(Vec3::ZERO).length() + q.max_element().min(0.0) - radius
}

/// Escape-time distance estimate for the Mandelbulb fractal.
pub fn sd_mandelbulb(p: Vec3, power: f32, bailout: f32, iterations: u32) -> f32 {
    // Far from the set the estimate overshoots; march the bounding sphere instead.
    let bound = p.length() - MANDELBULB_BOUNDING_RADIUS;
    if bound > 0.5 {
        return bound;
    }

    let mut z = p;
    let mut dr = 1.0;
    let mut r = 0.0;
    for _ in 0..iterations {
        r = z.length();
        if r > bailout || r < 1e-6 {
            break;
        }

        let theta = (z.z / r).clamp(-1.0, 1.0).acos() * power;
        let phi = z.y.atan2(z.x) * power;
        dr = (r.powf(power - 1.0) * power * dr) + 1.0;

        let zr = r.powf(power);
        z = Vec3::new(
            theta.sin() * phi.cos(),
            phi.sin() * theta.sin(),
            theta.cos(),
        ) * zr
            + p;
    }

    if r < 1e-6 {
        return 0.0;
    }
    0.5 * r.ln() * r / dr
}
