use crate::domain::Scene;
use crate::error::SceneError;
use crate::math::is_finite_vec3;

/// Rejects out-of-range scene parameters before a render pass.
pub fn validate_scene(scene: &Scene) -> Result<(), SceneError> {
    if !scene.blend_radius.is_finite() || scene.blend_radius < 0.0 {
        return Err(SceneError::BlendRadius(scene.blend_radius));
    }
    if !is_finite_vec3(scene.ambient) || scene.ambient.min_element() < 0.0 {
        return Err(SceneError::InvalidColor { field: "ambient" });
    }
    if !is_finite_vec3(scene.background) || scene.background.min_element() < 0.0 {
        return Err(SceneError::InvalidColor {
            field: "background",
        });
    }

    for primitive in &scene.primitives {
        primitive
            .validate_physical()
            .map_err(|reason| SceneError::InvalidPrimitive {
                name: primitive.name.clone(),
                reason,
            })?;
        primitive
            .material
            .validate_physical()
            .map_err(|reason| SceneError::InvalidMaterial {
                name: primitive.name.clone(),
                reason,
            })?;
    }

    for (index, light) in scene.lights.iter().enumerate() {
        light
            .validate_physical()
            .map_err(|reason| SceneError::InvalidLight { index, reason })?;
    }

    Ok(())
}
