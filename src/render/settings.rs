use crate::config::RenderFrameConfig;

pub const DEFAULT_MAX_STEPS: u32 = 300;
pub const DEFAULT_MAX_DISTANCE: f32 = 100.0;
pub const DEFAULT_SURFACE_THRESHOLD: f32 = 0.01;
pub const DEFAULT_MIN_STEP: f32 = 1e-3;
pub const DEFAULT_NORMAL_EPSILON: f32 = 0.01;
pub const DEFAULT_GAMMA: f32 = 2.2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarchSettings {
    pub max_steps: u32,
    pub max_distance: f32,
    pub surface_threshold: f32,
    pub min_step: f32,
    pub normal_epsilon: f32,
}

impl Default for MarchSettings {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            max_distance: DEFAULT_MAX_DISTANCE,
            surface_threshold: DEFAULT_SURFACE_THRESHOLD,
            min_step: DEFAULT_MIN_STEP,
            normal_epsilon: DEFAULT_NORMAL_EPSILON,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    pub gamma: f32,
    pub march: MarchSettings,
}

impl RenderSettings {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            gamma: DEFAULT_GAMMA,
            march: MarchSettings::default(),
        }
    }

    pub fn from_frame(frame: &RenderFrameConfig) -> Self {
        let mut settings = Self::new(frame.width, frame.height);
        if let Some(max_steps) = frame.march_max_steps {
            settings.march.max_steps = max_steps.max(1);
        }
        if let Some(max_distance) = frame.max_distance {
            settings.march.max_distance = max_distance;
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn march_defaults() {
        let settings = RenderSettings::new(800, 600);
        assert_eq!(settings.march.max_steps, 300);
        assert_eq!(settings.march.max_distance, 100.0);
        assert_eq!(settings.march.surface_threshold, 0.01);
        assert_eq!(settings.march.normal_epsilon, 0.01);
        assert_eq!(settings.gamma, 2.2);
    }

    #[test]
    fn frame_overrides_march_limits() {
        let frame: RenderFrameConfig = serde_json::from_str(
            r#"{
                "width": 4,
                "height": 3,
                "outputPath": "out/frame.png",
                "scene": "twin_spheres",
                "marchMaxSteps": 0,
                "maxDistance": 25.0
            }"#,
        )
        .expect("frame config should parse");
        let settings = RenderSettings::from_frame(&frame);
        assert_eq!(settings.march.max_steps, 1);
        assert_eq!(settings.march.max_distance, 25.0);
        assert_eq!((settings.width, settings.height), (4, 3));
    }
}
