use std::f32::consts::FRAC_PI_2;
use std::path::Path;

use glam::Vec3;
use serde::Deserialize;

use crate::domain::light::{DEFAULT_AMBIENT, DEFAULT_BACKGROUND, DEFAULT_LIGHTS};
use crate::domain::presets::build_scene;
use crate::domain::primitive::{
    DEFAULT_MANDELBULB_BAILOUT, DEFAULT_MANDELBULB_ITERATIONS, DEFAULT_MANDELBULB_POWER,
};
use crate::domain::{Light, Material, Primitive, Scene, Shape, DEFAULT_BLEND_RADIUS};
use crate::error::{ConfigError, SceneError};
use crate::render::view::DEFAULT_CAMERA_POSITION;

pub const THREADS_ENV: &str = "IMPLICIT_RENDER_THREADS";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderFrameConfig {
    pub width: u32,
    pub height: u32,
    pub output_path: String,
    pub scene: SceneSource,
    #[serde(default)]
    pub camera: CameraConfig,
    pub march_max_steps: Option<u32>,
    pub max_distance: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderBatchConfig {
    pub frames: Vec<RenderFrameConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum IncomingConfig {
    Single(Box<RenderFrameConfig>),
    Batch(RenderBatchConfig),
}

impl IncomingConfig {
    pub fn into_frames(self) -> Result<Vec<RenderFrameConfig>, ConfigError> {
        let frames = match self {
            Self::Single(frame) => vec![*frame],
            Self::Batch(batch) => batch.frames,
        };
        if frames.is_empty() {
            return Err(ConfigError::NoFrames);
        }
        Ok(frames)
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SceneSource {
    Preset(String),
    Inline(InlineSceneConfig),
}

impl SceneSource {
    /// Key under which a built scene can be reused across frames.
    pub fn cache_key(&self) -> Option<String> {
        match self {
            Self::Preset(id) => Some(id.to_ascii_lowercase()),
            Self::Inline(_) => None,
        }
    }

    pub fn build(&self) -> Result<Scene, SceneError> {
        match self {
            Self::Preset(id) => build_scene(id.trim()),
            Self::Inline(inline) => inline.build(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineSceneConfig {
    #[serde(default = "default_inline_id")]
    pub id: String,
    pub primitives: Vec<PrimitiveConfig>,
    pub lights: Option<Vec<LightConfig>>,
    pub blend_radius: Option<f32>,
    pub ambient: Option<[f32; 3]>,
    pub background: Option<[f32; 3]>,
}

impl InlineSceneConfig {
    pub fn build(&self) -> Result<Scene, SceneError> {
        let primitives = self
            .primitives
            .iter()
            .enumerate()
            .map(|(index, primitive)| primitive.to_primitive(index))
            .collect::<Result<Vec<_>, _>>()?;
        let lights = match &self.lights {
            Some(lights) => lights.iter().map(LightConfig::to_light).collect(),
            None => DEFAULT_LIGHTS.to_vec(),
        };

        Ok(Scene {
            id: self.id.clone(),
            primitives,
            lights,
            blend_radius: self.blend_radius.unwrap_or(DEFAULT_BLEND_RADIUS),
            ambient: self.ambient.map(Vec3::from_array).unwrap_or(DEFAULT_AMBIENT),
            background: self
                .background
                .map(Vec3::from_array)
                .unwrap_or(DEFAULT_BACKGROUND),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimitiveConfig {
    pub name: Option<String>,
    #[serde(default = "default_kind")]
    pub kind: String,
    #[serde(default)]
    pub position: [f32; 3],
    pub radius: Option<f32>,
    pub normal: Option<[f32; 3]>,
    pub offset: Option<f32>,
    pub half_extents: Option<[f32; 3]>,
    pub power: Option<f32>,
    pub bailout: Option<f32>,
    pub iterations: Option<u32>,
    #[serde(flatten)]
    pub material: MaterialConfig,
}

impl PrimitiveConfig {
    pub fn to_primitive(&self, index: usize) -> Result<Primitive, SceneError> {
        let name = self
            .name
            .clone()
            .unwrap_or_else(|| format!("primitive_{index}"));
        let shape = match self.kind.to_ascii_lowercase().as_str() {
            "sphere" => Shape::Sphere {
                radius: self.radius.unwrap_or(1.0),
            },
            "plane" => Shape::Plane {
                normal: self
                    .normal
                    .map(Vec3::from_array)
                    .unwrap_or(Vec3::Y)
                    .normalize_or_zero(),
                offset: self.offset.unwrap_or(0.0),
            },
            "roundedbox" | "rounded_box" => Shape::RoundedBox {
                half_extents: self
                    .half_extents
                    .map(Vec3::from_array)
                    .unwrap_or(Vec3::splat(0.5)),
                radius: self.radius.unwrap_or(0.0),
            },
            "mandelbulb" => Shape::Mandelbulb {
                power: self.power.unwrap_or(DEFAULT_MANDELBULB_POWER),
                bailout: self.bailout.unwrap_or(DEFAULT_MANDELBULB_BAILOUT),
                iterations: self.iterations.unwrap_or(DEFAULT_MANDELBULB_ITERATIONS),
            },
            other => return Err(SceneError::UnknownKind(other.to_string())),
        };

        Ok(Primitive {
            name,
            position: Vec3::from_array(self.position),
            shape,
            material: self.material.to_material(),
        })
    }
}

/// Material fields as the parameter panel names them; colours are in [0, 1].
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialConfig {
    pub color: Option<[f32; 3]>,
    pub metalness: Option<f32>,
    pub roughness: Option<f32>,
    pub emissive: Option<[f32; 3]>,
    pub anisotropy: Option<f32>,
    pub subsurface: Option<f32>,
    pub subsurface_color: Option<[f32; 3]>,
    pub sheen: Option<f32>,
    #[serde(alias = "sheenTint")]
    pub sheen_color: Option<[f32; 3]>,
}

impl MaterialConfig {
    pub fn to_material(&self) -> Material {
        let defaults = Material::default();
        Material {
            base_color: self.color.map(Vec3::from_array).unwrap_or(defaults.base_color),
            metallic: self.metalness.unwrap_or(defaults.metallic),
            roughness: self.roughness.unwrap_or(defaults.roughness),
            emissive: self.emissive.map(Vec3::from_array).unwrap_or(defaults.emissive),
            anisotropy: self.anisotropy.unwrap_or(defaults.anisotropy),
            subsurface: self.subsurface.unwrap_or(defaults.subsurface),
            subsurface_color: self
                .subsurface_color
                .map(Vec3::from_array)
                .unwrap_or(defaults.subsurface_color),
            sheen: self.sheen.unwrap_or(defaults.sheen),
            sheen_color: self
                .sheen_color
                .map(Vec3::from_array)
                .unwrap_or(defaults.sheen_color),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightConfig {
    pub direction: [f32; 3],
    pub color: [f32; 3],
}

impl LightConfig {
    pub fn to_light(&self) -> Light {
        Light::new(Vec3::from_array(self.direction), Vec3::from_array(self.color))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraConfig {
    #[serde(default = "default_camera_position")]
    pub position: [f32; 3],
    #[serde(default)]
    pub rotation: [f32; 3],
    pub fov_deg: Option<f32>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: default_camera_position(),
            rotation: [0.0; 3],
            fov_deg: None,
        }
    }
}

/// Process-level knobs read from the environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct RuntimeOptions {
    pub threads: Option<usize>,
}

impl RuntimeOptions {
    pub fn from_env() -> Self {
        let threads = std::env::var(THREADS_ENV)
            .ok()
            .and_then(|raw| parse_threads(&raw));
        Self { threads }
    }
}

fn parse_threads(raw: &str) -> Option<usize> {
    match raw.trim().parse::<usize>() {
        Ok(0) | Err(_) => None,
        Ok(threads) => Some(threads),
    }
}

fn default_inline_id() -> String {
    "inline".to_string()
}

fn default_kind() -> String {
    "sphere".to_string()
}

fn default_camera_position() -> [f32; 3] {
    DEFAULT_CAMERA_POSITION.to_array()
}

pub fn validate_config(config: &RenderFrameConfig) -> Result<(), ConfigError> {
    if config.width == 0 || config.height == 0 {
        return Err(ConfigError::EmptyResolution {
            width: config.width,
            height: config.height,
        });
    }

    let output_parent = Path::new(&config.output_path)
        .parent()
        .ok_or_else(|| ConfigError::MissingOutputParent(config.output_path.clone()))?;
    // A bare file name has an empty parent: the working directory.
    if !output_parent.as_os_str().is_empty() && !output_parent.exists() {
        return Err(ConfigError::OutputDirectoryMissing(
            output_parent.display().to_string(),
        ));
    }

    if let SceneSource::Preset(id) = &config.scene {
        if id.trim().is_empty() {
            return Err(ConfigError::EmptySceneId);
        }
    }

    if !is_finite_array(config.camera.position) {
        return Err(ConfigError::NonFinite {
            field: "camera.position",
        });
    }
    if !is_finite_array(config.camera.rotation) {
        return Err(ConfigError::NonFinite {
            field: "camera.rotation",
        });
    }
    let pitch = config.camera.rotation[0];
    if pitch.abs() >= FRAC_PI_2 {
        return Err(ConfigError::PitchOutOfRange(pitch));
    }
    if let Some(fov) = config.camera.fov_deg {
        if !fov.is_finite() || fov <= 0.0 || fov >= 180.0 {
            return Err(ConfigError::FieldOfView(fov));
        }
    }

    if config.march_max_steps == Some(0) {
        return Err(ConfigError::ZeroMarchSteps);
    }
    if let Some(max_distance) = config.max_distance {
        if !max_distance.is_finite() || max_distance <= 0.0 {
            return Err(ConfigError::MaxDistance(max_distance));
        }
    }

    Ok(())
}

fn is_finite_array(value: [f32; 3]) -> bool {
    value.iter().all(|component| component.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> RenderFrameConfig {
        serde_json::from_str(raw).expect("frame config should parse")
    }

    #[test]
    fn parses_preset_frame_with_defaults() {
        let frame = parse(r#"{"width": 8, "height": 6, "outputPath": "f.png", "scene": "twin_spheres"}"#);
        assert!(matches!(&frame.scene, SceneSource::Preset(id) if id == "twin_spheres"));
        assert_eq!(frame.camera.position, [0.0, 0.0, -10.0]);
        assert_eq!(frame.camera.rotation, [0.0; 3]);
        assert!(validate_config(&frame).is_ok());
    }

    #[test]
    fn parses_inline_scene_and_maps_each_radius_to_its_own_sphere() {
        let frame = parse(
            r#"{
                "width": 8,
                "height": 6,
                "outputPath": "f.png",
                "camera": {"position": [0, 0, -10], "rotation": [0.1, 0.2, 0.0]},
                "scene": {
                    "blendRadius": 0.5,
                    "primitives": [
                        {"name": "blue", "position": [-1, 0, 4], "radius": 0.5, "color": [0, 0, 1]},
                        {"name": "red", "position": [1, 0, 4], "radius": 1.5, "color": [1, 0, 0],
                         "roughness": 0.1, "sheen": 2.0, "sheenTint": [1, 1, 1]}
                    ]
                }
            }"#,
        );
        let scene = frame.scene.build().expect("inline scene should build");
        assert_eq!(scene.blend_radius, 0.5);
        assert_eq!(scene.lights.len(), 3);
        assert_eq!(scene.primitives[0].shape, Shape::Sphere { radius: 0.5 });
        assert_eq!(scene.primitives[1].shape, Shape::Sphere { radius: 1.5 });
        assert_eq!(scene.primitives[1].material.sheen, 2.0);
        assert_eq!(scene.primitives[1].material.sheen_color, Vec3::ONE);
        assert_eq!(scene.primitives[1].material.roughness, 0.1);
    }

    #[test]
    fn parses_extension_shapes() {
        let scene = InlineSceneConfig {
            id: "shapes".into(),
            primitives: serde_json::from_str(
                r#"[
                    {"kind": "plane", "normal": [0, 2, 0], "offset": 1.0},
                    {"kind": "roundedBox", "halfExtents": [1, 2, 3], "radius": 0.1},
                    {"kind": "mandelbulb"}
                ]"#,
            )
            .expect("primitives should parse"),
            lights: None,
            blend_radius: None,
            ambient: None,
            background: None,
        }
        .build()
        .expect("shapes should build");

        assert_eq!(
            scene.primitives[0].shape,
            Shape::Plane {
                normal: Vec3::Y,
                offset: 1.0
            }
        );
        assert_eq!(scene.primitives[0].name, "primitive_0");
        assert!(matches!(scene.primitives[1].shape, Shape::RoundedBox { .. }));
        assert!(matches!(
            scene.primitives[2].shape,
            Shape::Mandelbulb { iterations: 5, .. }
        ));
    }

    #[test]
    fn rejects_unknown_kind() {
        let primitive: PrimitiveConfig =
            serde_json::from_str(r#"{"kind": "teapot"}"#).expect("parse");
        assert!(matches!(
            primitive.to_primitive(0),
            Err(SceneError::UnknownKind(kind)) if kind == "teapot"
        ));
    }

    #[test]
    fn parses_batch_of_frames() {
        let incoming: IncomingConfig = serde_json::from_str(
            r#"{"frames": [
                {"width": 2, "height": 2, "outputPath": "a.png", "scene": "twin_spheres"},
                {"width": 2, "height": 2, "outputPath": "b.png", "scene": "shape_gallery"}
            ]}"#,
        )
        .expect("batch should parse");
        assert_eq!(incoming.into_frames().expect("frames").len(), 2);
    }

    #[test]
    fn rejects_empty_batch() {
        let incoming: IncomingConfig =
            serde_json::from_str(r#"{"frames": []}"#).expect("batch should parse");
        assert!(matches!(incoming.into_frames(), Err(ConfigError::NoFrames)));
    }

    #[test]
    fn rejects_zero_resolution() {
        let frame = parse(r#"{"width": 0, "height": 6, "outputPath": "f.png", "scene": "x"}"#);
        assert!(matches!(
            validate_config(&frame),
            Err(ConfigError::EmptyResolution { .. })
        ));
    }

    #[test]
    fn rejects_vertical_pitch() {
        let frame = parse(
            r#"{"width": 2, "height": 2, "outputPath": "f.png", "scene": "x",
                "camera": {"rotation": [1.5708, 0, 0]}}"#,
        );
        assert!(matches!(
            validate_config(&frame),
            Err(ConfigError::PitchOutOfRange(_))
        ));
    }

    #[test]
    fn rejects_missing_output_directory() {
        let frame = parse(
            r#"{"width": 2, "height": 2, "outputPath": "/definitely/not/here/f.png", "scene": "x"}"#,
        );
        assert!(matches!(
            validate_config(&frame),
            Err(ConfigError::OutputDirectoryMissing(_))
        ));
    }

    #[test]
    fn thread_override_ignores_garbage() {
        assert_eq!(parse_threads(" 4 "), Some(4));
        assert_eq!(parse_threads("0"), None);
        assert_eq!(parse_threads("many"), None);
    }
}
