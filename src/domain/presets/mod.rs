mod shape_gallery;
mod twin_spheres;
mod velvet_and_wax;

use crate::domain::Scene;
use crate::error::SceneError;

pub const PRESET_IDS: [&str; 3] = [
    twin_spheres::SCENE_ID,
    shape_gallery::SCENE_ID,
    velvet_and_wax::SCENE_ID,
];

pub fn build_scene(scene_id: &str) -> Result<Scene, SceneError> {
    if scene_id.eq_ignore_ascii_case(twin_spheres::SCENE_ID) {
        return Ok(twin_spheres::build());
    }
    if scene_id.eq_ignore_ascii_case(shape_gallery::SCENE_ID) {
        return Ok(shape_gallery::build());
    }
    if scene_id.eq_ignore_ascii_case(velvet_and_wax::SCENE_ID) {
        return Ok(velvet_and_wax::build());
    }

    Err(SceneError::UnknownPreset(scene_id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::validation::validate_scene;

    #[test]
    fn every_preset_builds_and_validates() {
        for id in PRESET_IDS {
            let scene = build_scene(id).expect("preset should build");
            assert_eq!(scene.id, id);
            validate_scene(&scene).expect("preset should validate");
        }
    }

    #[test]
    fn preset_lookup_ignores_case() {
        assert!(build_scene("TWIN_SPHERES").is_ok());
    }

    #[test]
    fn unknown_preset_is_rejected() {
        let error = build_scene("menger").expect_err("unknown id must fail");
        assert!(matches!(error, SceneError::UnknownPreset(id) if id == "menger"));
    }
}
