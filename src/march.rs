use glam::Vec3;

use crate::math::Ray;
use crate::render::settings::MarchSettings;
use crate::sdf::{SceneField, Surface};

#[derive(Clone, Copy, Debug)]
pub struct Hit {
    pub t: f32,
    pub point: Vec3,
    pub surface: Surface,
    pub steps: u32,
}

#[derive(Clone, Copy, Debug)]
pub enum MarchOutcome {
    Hit(Hit),
    /// Left the marching range or ran out of steps.
    Miss { steps: u32 },
}

impl MarchOutcome {
    pub fn hit(self) -> Option<Hit> {
        match self {
            Self::Hit(hit) => Some(hit),
            Self::Miss { .. } => None,
        }
    }

    pub fn steps(self) -> u32 {
        match self {
            Self::Hit(hit) => hit.steps,
            Self::Miss { steps } => steps,
        }
    }
}

/// Sphere-traces `ray` through `field`.
///
/// Steps advance by the magnitude of the sampled distance, never less than
/// `settings.min_step`, so a ray starting inside a surface still moves
/// forward and the loop always ends within `settings.max_steps`.
pub fn march(field: &SceneField<'_>, ray: Ray, settings: &MarchSettings) -> MarchOutcome {
    let mut t = 0.0;
    for step in 0..settings.max_steps {
        if t > settings.max_distance {
            return MarchOutcome::Miss { steps: step };
        }

        let point = ray.at(t);
        let surface = field.sample(point);
        if surface.distance.abs() < settings.surface_threshold {
            return MarchOutcome::Hit(Hit {
                t,
                point,
                surface,
                steps: step + 1,
            });
        }

        t += surface.distance.abs().max(settings.min_step);
    }
    MarchOutcome::Miss {
        steps: settings.max_steps,
    }
}

/// Central-difference gradient of the distance field, normalized.
pub fn estimate_normal(field: &SceneField<'_>, p: Vec3, epsilon: f32) -> Vec3 {
    let ex = Vec3::new(epsilon, 0.0, 0.0);
    let ey = Vec3::new(0.0, epsilon, 0.0);
    let ez = Vec3::new(0.0, 0.0, epsilon);
    let gradient = Vec3::new(
        field.distance(p + ex) - field.distance(p - ex),
        field.distance(p + ey) - field.distance(p - ey),
        field.distance(p + ez) - field.distance(p - ez),
    );
    gradient.try_normalize().unwrap_or(Vec3::Y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Material, Primitive};

    fn unit_sphere_at(center: Vec3) -> [Primitive; 1] {
        [Primitive::sphere("s", center, 1.0, Material::default())]
    }

    #[test]
    fn hits_sphere_in_front() {
        let primitives = unit_sphere_at(Vec3::new(0.0, 0.0, 5.0));
        let field = SceneField::new(&primitives, 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let hit = march(&field, ray, &MarchSettings::default())
            .hit()
            .expect("ray aimed at sphere should hit");
        assert!((hit.t - 4.0).abs() < 0.01);
        assert!((hit.point.z - 4.0).abs() < 0.01);
    }

    #[test]
    fn misses_sphere_off_axis() {
        let primitives = unit_sphere_at(Vec3::new(0.0, 5.0, 5.0));
        let field = SceneField::new(&primitives, 1.0);
        let outcome = march(&field, Ray::new(Vec3::ZERO, Vec3::Z), &MarchSettings::default());
        assert!(outcome.hit().is_none());
    }

    #[test]
    fn surface_beyond_range_is_a_miss() {
        let primitives = unit_sphere_at(Vec3::new(0.0, 0.0, 1000.0));
        let field = SceneField::new(&primitives, 1.0);
        let outcome = march(&field, Ray::new(Vec3::ZERO, Vec3::Z), &MarchSettings::default());
        assert!(matches!(outcome, MarchOutcome::Miss { steps: 1 }));
    }

    #[test]
    fn origin_inside_sphere_terminates() {
        let primitives = unit_sphere_at(Vec3::ZERO);
        let field = SceneField::new(&primitives, 1.0);
        let settings = MarchSettings::default();
        let outcome = march(&field, Ray::new(Vec3::new(0.2, 0.1, 0.0), Vec3::Z), &settings);
        assert!(outcome.steps() <= settings.max_steps);
        let hit = outcome.hit().expect("marching from inside reaches the shell");
        assert!(hit.point.length() > 0.98);
    }

    #[test]
    fn exhausted_budget_is_a_miss() {
        let primitives = unit_sphere_at(Vec3::new(0.0, 0.0, 50.0));
        let field = SceneField::new(&primitives, 1.0);
        let settings = MarchSettings {
            max_steps: 1,
            ..MarchSettings::default()
        };
        let outcome = march(&field, Ray::new(Vec3::ZERO, Vec3::Z), &settings);
        assert!(matches!(outcome, MarchOutcome::Miss { steps: 1 }));
    }

    #[test]
    fn normal_points_away_from_center() {
        let primitives = unit_sphere_at(Vec3::new(1.0, 2.0, 3.0));
        let field = SceneField::new(&primitives, 1.0);
        let n = estimate_normal(&field, Vec3::new(1.0, 2.0, 2.0), 0.01);
        assert!((n - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-3);
    }

    #[test]
    fn degenerate_gradient_falls_back_to_up() {
        let field = SceneField::new(&[], 1.0);
        // Infinite minus infinite is NaN; the fallback keeps shading finite.
        assert_eq!(estimate_normal(&field, Vec3::ZERO, 0.01), Vec3::Y);
    }
}
