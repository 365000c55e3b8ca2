use glam::{Mat3, Vec2, Vec3};

use crate::config::RenderFrameConfig;
use crate::math::{rotation_x, rotation_y, rotation_z, Ray};

pub const DEFAULT_FOV_DEG: f32 = 40.0;
pub const DEFAULT_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 0.0, -10.0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    /// Pitch, yaw and roll in radians.
    pub rotation: Vec3,
    pub fov_deg: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: DEFAULT_CAMERA_POSITION,
            rotation: Vec3::ZERO,
            fov_deg: DEFAULT_FOV_DEG,
        }
    }
}

impl Camera {
    pub fn new(position: Vec3, rotation: Vec3) -> Self {
        Self {
            position,
            rotation,
            fov_deg: DEFAULT_FOV_DEG,
        }
    }

    pub fn from_frame(frame: &RenderFrameConfig) -> Self {
        Self {
            position: Vec3::from_array(frame.camera.position),
            rotation: Vec3::from_array(frame.camera.rotation),
            fov_deg: frame.camera.fov_deg.unwrap_or(DEFAULT_FOV_DEG),
        }
    }

    /// Yaw outermost, roll innermost.
    pub fn orientation(&self) -> Mat3 {
        rotation_y(self.rotation.y) * rotation_x(self.rotation.x) * rotation_z(self.rotation.z)
    }

    pub fn projection(&self, width: u32, height: u32) -> Projection {
        let resolution = Vec2::new(width as f32, height as f32);
        Projection {
            origin: self.position,
            orientation: self.orientation(),
            resolution,
            aspect_ratio: resolution.x / resolution.y,
            scale: (self.fov_deg.to_radians() * 0.5).tan(),
        }
    }
}

/// Per-frame camera snapshot that turns fragment coordinates into rays.
#[derive(Clone, Copy, Debug)]
pub struct Projection {
    origin: Vec3,
    orientation: Mat3,
    resolution: Vec2,
    aspect_ratio: f32,
    scale: f32,
}

impl Projection {
    /// `frag` is a fragment coordinate: origin at the bottom-left corner,
    /// y up, pixel centres at half-integers.
    pub fn ray(&self, frag: Vec2) -> Ray {
        let uv = ((frag / self.resolution) * 2.0) - Vec2::ONE;
        let uv = Vec2::new(uv.x * self.aspect_ratio, uv.y) * self.scale;
        let direction = self.orientation * Vec3::new(uv.x, uv.y, 1.0).normalize();
        Ray {
            origin: self.origin,
            direction,
        }
    }
}
