use glam::{Mat3, Vec3};

#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    pub fn at(self, t: f32) -> Vec3 {
        self.origin + (self.direction * t)
    }
}

pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    (a * (1.0 - t)) + (b * t)
}

pub fn mix_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    (a * (1.0 - t)) + (b * t)
}

pub fn pow5(v: f32) -> f32 {
    let v2 = v * v;
    v2 * v2 * v
}

pub fn gamma_correct(color: Vec3, gamma: f32) -> Vec3 {
    let inv = 1.0 / gamma;
    let c = color.max(Vec3::ZERO);
    Vec3::new(c.x.powf(inv), c.y.powf(inv), c.z.powf(inv))
}

pub fn is_finite_vec3(value: Vec3) -> bool {
    value.x.is_finite() && value.y.is_finite() && value.z.is_finite()
}

// The three rotations below are written column by column. Positive pitch
// tilts the forward axis towards +Y, positive yaw swings it towards -X.

pub fn rotation_x(angle: f32) -> Mat3 {
    let (s, c) = angle.sin_cos();
    Mat3::from_cols(
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, c, -s),
        Vec3::new(0.0, s, c),
    )
}

pub fn rotation_y(angle: f32) -> Mat3 {
    let (s, c) = angle.sin_cos();
    Mat3::from_cols(
        Vec3::new(c, 0.0, s),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(-s, 0.0, c),
    )
}

pub fn rotation_z(angle: f32) -> Mat3 {
    let (s, c) = angle.sin_cos();
    Mat3::from_cols(
        Vec3::new(c, -s, 0.0),
        Vec3::new(s, c, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
    )
}
