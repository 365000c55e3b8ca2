use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("width and height must be positive, got {width}x{height}")]
    EmptyResolution { width: u32, height: u32 },
    #[error("outputPath must include a parent directory: {0}")]
    MissingOutputParent(String),
    #[error("output directory does not exist: {0}")]
    OutputDirectoryMissing(String),
    #[error("{field} must contain finite values")]
    NonFinite { field: &'static str },
    #[error("camera pitch {0} must lie strictly between -pi/2 and pi/2")]
    PitchOutOfRange(f32),
    #[error("fovDeg must lie in (0, 180), got {0}")]
    FieldOfView(f32),
    #[error("marchMaxSteps must be at least 1")]
    ZeroMarchSteps,
    #[error("maxDistance must be finite and > 0, got {0}")]
    MaxDistance(f32),
    #[error("scene must be a non-empty identifier")]
    EmptySceneId,
    #[error("frames array must not be empty")]
    NoFrames,
    #[error(transparent)]
    Scene(#[from] SceneError),
}

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("unknown scene identifier: {0}")]
    UnknownPreset(String),
    #[error("primitive '{name}': {reason}")]
    InvalidPrimitive { name: String, reason: String },
    #[error("primitive '{name}' material: {reason}")]
    InvalidMaterial { name: String, reason: String },
    #[error("light {index}: {reason}")]
    InvalidLight { index: usize, reason: String },
    #[error("blend radius must be finite and >= 0, got {0}")]
    BlendRadius(f32),
    #[error("{field} must be finite and >= 0")]
    InvalidColor { field: &'static str },
    #[error("unknown primitive kind '{0}'")]
    UnknownKind(String),
}
