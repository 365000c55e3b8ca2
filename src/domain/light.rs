use glam::Vec3;

use crate::math::is_finite_vec3;

/// Directional light. `direction` points from the surface towards the light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub direction: Vec3,
    pub color: Vec3,
}

impl Light {
    pub fn new(direction: Vec3, color: Vec3) -> Self {
        Self {
            direction: direction.normalize(),
            color,
        }
    }

    pub fn validate_physical(&self) -> Result<(), String> {
        if !is_finite_vec3(self.direction) {
            return Err(format!(
                "direction components must be finite, got ({}, {}, {})",
                self.direction.x, self.direction.y, self.direction.z
            ));
        }
        if (self.direction.length() - 1.0).abs() > 1e-3 {
            return Err(format!(
                "direction must be unit length, got length {}",
                self.direction.length()
            ));
        }
        if !is_finite_vec3(self.color) || self.color.min_element() < 0.0 {
            return Err(format!(
                "color components must be finite and >= 0, got ({}, {}, {})",
                self.color.x, self.color.y, self.color.z
            ));
        }
        Ok(())
    }
}

/// Three-light rig used when a scene does not bring its own.
///
/// Directions are pre-normalized:
/// normalize(-2.18, 1.28, -1.58), normalize(2, 1, 1), normalize(0, 1, -1).
pub const DEFAULT_LIGHTS: [Light; 3] = [
    Light {
        direction: Vec3::new(-0.731264, 0.429366, -0.529998),
        color: Vec3::new(2.0, 2.0, 2.0),
    },
    Light {
        direction: Vec3::new(0.816497, 0.408248, 0.408248),
        color: Vec3::new(1.0, 0.5, 0.2),
    },
    Light {
        direction: Vec3::new(0.0, 0.707107, -0.707107),
        color: Vec3::new(0.2, 0.5, 1.0),
    },
];

pub const DEFAULT_AMBIENT: Vec3 = Vec3::new(0.07, 0.07, 0.07);

pub const DEFAULT_BACKGROUND: Vec3 = Vec3::ZERO;
