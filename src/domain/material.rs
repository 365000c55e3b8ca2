use glam::Vec3;

use crate::math::{is_finite_vec3, mix, mix_vec3};

/// Surface appearance parameters carried by every primitive and interpolated
/// by the blend operator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub base_color: Vec3,
    pub metallic: f32,
    pub roughness: f32,
    pub emissive: Vec3,
    /// Stretches the specular lobe along the tangent (negative) or the
    /// bitangent (positive).
    pub anisotropy: f32,
    pub subsurface: f32,
    pub subsurface_color: Vec3,
    pub sheen: f32,
    pub sheen_color: Vec3,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            base_color: Vec3::splat(0.8),
            metallic: 0.0,
            roughness: 0.5,
            emissive: Vec3::ZERO,
            anisotropy: 0.0,
            subsurface: 0.0,
            subsurface_color: Vec3::ZERO,
            sheen: 0.0,
            sheen_color: Vec3::ONE,
        }
    }
}

impl Material {
    pub fn with_color(base_color: Vec3) -> Self {
        Self {
            base_color,
            ..Self::default()
        }
    }

    /// Field-wise linear interpolation from `self` (t = 0) to `other` (t = 1).
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            base_color: mix_vec3(self.base_color, other.base_color, t),
            metallic: mix(self.metallic, other.metallic, t),
            roughness: mix(self.roughness, other.roughness, t),
            emissive: mix_vec3(self.emissive, other.emissive, t),
            anisotropy: mix(self.anisotropy, other.anisotropy, t),
            subsurface: mix(self.subsurface, other.subsurface, t),
            subsurface_color: mix_vec3(self.subsurface_color, other.subsurface_color, t),
            sheen: mix(self.sheen, other.sheen, t),
            sheen_color: mix_vec3(self.sheen_color, other.sheen_color, t),
        }
    }

    pub fn validate_physical(&self) -> Result<(), String> {
        validate_unit_color(self.base_color, "color")?;
        validate_unit_scalar(self.metallic, "metalness")?;
        if !self.roughness.is_finite() || self.roughness <= 0.0 || self.roughness > 1.0 {
            return Err(format!(
                "roughness must lie in (0, 1], got {}",
                self.roughness
            ));
        }
        if !is_finite_vec3(self.emissive) || self.emissive.min_element() < 0.0 {
            return Err(format!(
                "emissive components must be finite and >= 0, got ({}, {}, {})",
                self.emissive.x, self.emissive.y, self.emissive.z
            ));
        }
        if !self.anisotropy.is_finite() || !(-1.0..=1.0).contains(&self.anisotropy) {
            return Err(format!(
                "anisotropy must lie in [-1, 1], got {}",
                self.anisotropy
            ));
        }
        validate_unit_scalar(self.subsurface, "subsurface")?;
        validate_unit_color(self.subsurface_color, "subsurfaceColor")?;
        if !self.sheen.is_finite() || !(0.0..=100.0).contains(&self.sheen) {
            return Err(format!("sheen must lie in [0, 100], got {}", self.sheen));
        }
        validate_unit_color(self.sheen_color, "sheenColor")?;
        Ok(())
    }
}

fn validate_unit_scalar(value: f32, field: &str) -> Result<(), String> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(format!("{field} must lie in [0, 1], got {value}"));
    }
    Ok(())
}

fn validate_unit_color(value: Vec3, field: &str) -> Result<(), String> {
    if !is_finite_vec3(value) || value.min_element() < 0.0 || value.max_element() > 1.0 {
        return Err(format!(
            "{field} components must lie in [0, 1], got ({}, {}, {})",
            value.x, value.y, value.z
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_material_is_valid() {
        assert!(Material::default().validate_physical().is_ok());
    }

    #[test]
    fn lerp_hits_both_endpoints() {
        let a = Material::with_color(Vec3::new(0.0, 0.0, 1.0));
        let b = Material {
            roughness: 0.1,
            sheen: 4.0,
            ..Material::with_color(Vec3::new(1.0, 0.0, 0.0))
        };
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);

        let mid = a.lerp(&b, 0.5);
        assert_eq!(mid.base_color, Vec3::new(0.5, 0.0, 0.5));
        assert!((mid.roughness - 0.3).abs() < 1e-6);
        assert!((mid.sheen - 2.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_zero_roughness() {
        let material = Material {
            roughness: 0.0,
            ..Material::default()
        };
        let error = material.validate_physical().expect_err("zero roughness must fail");
        assert!(error.contains("roughness"));
    }

    #[test]
    fn rejects_out_of_range_sheen() {
        let material = Material {
            sheen: 120.0,
            ..Material::default()
        };
        assert!(material.validate_physical().is_err());
    }

    #[test]
    fn rejects_color_above_one() {
        let material = Material::with_color(Vec3::new(255.0, 0.0, 0.0));
        assert!(material.validate_physical().is_err());
    }
}
