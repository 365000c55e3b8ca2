use glam::Vec3;

use super::material::Material;
use crate::math::is_finite_vec3;
use crate::sdf::primitives::{sd_mandelbulb, sd_plane, sd_rounded_box, sd_sphere};

pub const DEFAULT_MANDELBULB_POWER: f32 = 8.0;
pub const DEFAULT_MANDELBULB_BAILOUT: f32 = 8.0;
pub const DEFAULT_MANDELBULB_ITERATIONS: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Sphere {
        radius: f32,
    },
    Plane {
        normal: Vec3,
        offset: f32,
    },
    RoundedBox {
        half_extents: Vec3,
        radius: f32,
    },
    Mandelbulb {
        power: f32,
        bailout: f32,
        iterations: u32,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Primitive {
    pub name: String,
    /// World to local translation: the shape is evaluated at `p - position`.
    pub position: Vec3,
    pub shape: Shape,
    pub material: Material,
}

impl Primitive {
    pub fn sphere(name: impl Into<String>, position: Vec3, radius: f32, material: Material) -> Self {
        Self {
            name: name.into(),
            position,
            shape: Shape::Sphere { radius },
            material,
        }
    }

    pub fn distance(&self, p: Vec3) -> f32 {
        let local = p - self.position;
        match self.shape {
            Shape::Sphere { radius } => sd_sphere(local, radius),
            Shape::Plane { normal, offset } => sd_plane(local, normal, offset),
            Shape::RoundedBox {
                half_extents,
                radius,
            } => sd_rounded_box(local, half_extents, radius),
            Shape::Mandelbulb {
                power,
                bailout,
                iterations,
            } => sd_mandelbulb(local, power, bailout, iterations),
        }
    }

    pub fn validate_physical(&self) -> Result<(), String> {
        if !is_finite_vec3(self.position) {
            return Err("position components must be finite".into());
        }
        match self.shape {
            Shape::Sphere { radius } => validate_positive_finite(radius, "sphere radius")?,
            Shape::Plane { normal, offset } => {
                if !is_finite_vec3(normal) || normal.length() < 1e-4 {
                    return Err("plane normal must be finite and non-zero".into());
                }
                if !offset.is_finite() {
                    return Err(format!("plane offset must be finite, got {offset}"));
                }
            }
            Shape::RoundedBox {
                half_extents,
                radius,
            } => {
                if !is_finite_vec3(half_extents) || half_extents.min_element() <= 0.0 {
                    return Err(format!(
                        "rounded box half extents must be finite and > 0, got ({}, {}, {})",
                        half_extents.x, half_extents.y, half_extents.z
                    ));
                }
                if !radius.is_finite() || radius < 0.0 {
                    return Err(format!(
                        "rounded box radius must be finite and >= 0, got {radius}"
                    ));
                }
            }
            Shape::Mandelbulb {
                power,
                bailout,
                iterations,
            } => {
                if !power.is_finite() || power < 2.0 {
                    return Err(format!("mandelbulb power must be >= 2, got {power}"));
                }
                validate_positive_finite(bailout, "mandelbulb bailout")?;
                if iterations == 0 {
                    return Err("mandelbulb iterations must be at least 1".into());
                }
            }
        }
        Ok(())
    }
}

fn validate_positive_finite(value: f32, field: &str) -> Result<(), String> {
    if !value.is_finite() || value <= 0.0 {
        return Err(format!("{field} must be finite and > 0, got {value}"));
    }
    Ok(())
}
