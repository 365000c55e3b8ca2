//! Multi-lobe surface response: ambient and emissive base, then per light an
//! anisotropic Cook-Torrance specular, a Lambert diffuse, a grazing sheen and
//! a back-lit subsurface leak.

use std::f32::consts::PI;

use glam::Vec3;

use crate::domain::{Light, Material};
use crate::math::{mix_vec3, pow5, Ray};
use crate::sdf::Surface;

/// Floor applied to roughness; the anisotropic distribution divides by it.
pub const MIN_ROUGHNESS: f32 = 1e-3;
/// Anisotropy is kept away from +-1 where one lobe axis collapses to zero.
pub const MAX_ANISOTROPY: f32 = 0.99;
const DIELECTRIC_F0: f32 = 0.04;
const SPECULAR_DENOM_BIAS: f32 = 1e-3;
const SUBSURFACE_SCALE: f32 = 0.5;

/// Contribution of one light, split per lobe. `diffuse`, `specular` and
/// `sheen` already include the light colour and the cosine term.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LightSample {
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub sheen: Vec3,
    pub subsurface: Vec3,
}

impl LightSample {
    pub fn total(&self) -> Vec3 {
        self.diffuse + self.specular + self.sheen + self.subsurface
    }
}

pub fn shade(surface: &Surface, ray: &Ray, normal: Vec3, lights: &[Light], ambient: Vec3) -> Vec3 {
    let material = &surface.material;
    let view = -ray.direction.normalize();
    let base = (ambient * material.base_color * (1.0 - material.metallic)) + material.emissive;

    lights.iter().fold(base, |color, light| {
        color + evaluate_light(material, normal, view, light).total()
    })
}

pub fn evaluate_light(material: &Material, normal: Vec3, view: Vec3, light: &Light) -> LightSample {
    let l = light.direction;
    let cos_l = normal.dot(l);

    let subsurface = if cos_l < 0.0 && material.subsurface > 0.0 {
        material.subsurface_color * light.color * (-cos_l * material.subsurface * SUBSURFACE_SCALE)
    } else {
        Vec3::ZERO
    };

    let n_dot_l = cos_l.max(0.0);
    if n_dot_l <= 0.0 {
        return LightSample {
            subsurface,
            ..LightSample::default()
        };
    }

    let roughness = material.roughness.max(MIN_ROUGHNESS);
    let anisotropy = material.anisotropy.clamp(-MAX_ANISOTROPY, MAX_ANISOTROPY);
    let (tangent, bitangent) = tangent_space(normal);
    let half = (view + l).try_normalize().unwrap_or(normal);
    let n_dot_v = normal.dot(view).max(0.0);

    let f0 = mix_vec3(Vec3::splat(DIELECTRIC_F0), material.base_color, material.metallic);
    let d = distribution_anisotropic_ggx(normal, half, tangent, bitangent, roughness, anisotropy);
    let g = geometry_smith(n_dot_v, n_dot_l, roughness);
    let f = fresnel_schlick(half.dot(view).max(0.0), f0);

    let specular = (f * (d * g)) / ((4.0 * n_dot_v * n_dot_l) + SPECULAR_DENOM_BIAS);
    let kd = (Vec3::ONE - f) * (1.0 - material.metallic);
    let diffuse = kd * material.base_color / PI;
    let sheen = sheen_lobe(half, l, n_dot_l, material.sheen, material.sheen_color);

    let radiance = light.color * n_dot_l;
    LightSample {
        diffuse: diffuse * radiance,
        specular: specular * radiance,
        sheen: sheen * radiance,
        subsurface,
    }
}

pub fn fresnel_schlick(cos_theta: f32, f0: Vec3) -> Vec3 {
    f0 + ((Vec3::ONE - f0) * pow5((1.0 - cos_theta).clamp(0.0, 1.0)))
}

/// Anisotropic GGX normal distribution. The lobe width along the tangent is
/// `r^2 / (1 + a)` and along the bitangent `r^2 * (1 + a)`.
pub fn distribution_anisotropic_ggx(
    normal: Vec3,
    half: Vec3,
    tangent: Vec3,
    bitangent: Vec3,
    roughness: f32,
    anisotropy: f32,
) -> f32 {
    let alpha = roughness * roughness;
    let ax = alpha / (1.0 + anisotropy);
    let ay = alpha * (1.0 + anisotropy);

    let hx = half.dot(tangent);
    let hy = half.dot(bitangent);
    let hz = half.dot(normal);
    let denom = (hx * hx / (ax * ax)) + (hy * hy / (ay * ay)) + (hz * hz);
    1.0 / (PI * ax * ay * denom * denom)
}

pub fn geometry_schlick_ggx(n_dot_x: f32, roughness: f32) -> f32 {
    let r = roughness + 1.0;
    let k = (r * r) / 8.0;
    n_dot_x / ((n_dot_x * (1.0 - k)) + k)
}

/// Isotropic Smith term applied to both view and light even for anisotropic
/// lobes.
pub fn geometry_smith(n_dot_v: f32, n_dot_l: f32, roughness: f32) -> f32 {
    geometry_schlick_ggx(n_dot_v, roughness) * geometry_schlick_ggx(n_dot_l, roughness)
}

/// Retro-reflective fabric lobe. Exactly zero when `sheen <= 0`.
pub fn sheen_lobe(half: Vec3, light_dir: Vec3, n_dot_l: f32, sheen: f32, sheen_color: Vec3) -> Vec3 {
    if sheen <= 0.0 {
        return Vec3::ZERO;
    }
    let h_dot_l = half.dot(light_dir).max(0.0);
    sheen_color * (sheen * pow5(1.0 - h_dot_l) * n_dot_l)
}

/// Orthonormal tangent frame around `normal`. The world-up reference switches
/// to +X when the normal is nearly vertical.
pub fn tangent_space(normal: Vec3) -> (Vec3, Vec3) {
    let up = if normal.y.abs() < 0.999 { Vec3::Y } else { Vec3::X };
    let tangent = up.cross(normal).normalize();
    let bitangent = normal.cross(tangent);
    (tangent, bitangent)
}
