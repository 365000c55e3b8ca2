use super::Surface;
use crate::math::mix;

/// Blend weight and blended distance for two distances `a` and `b`.
///
/// The weight `h` is the share of `a` in the result: 1 when `a` is clearly the
/// nearer surface, 0 when `b` is. `k <= 0` collapses to a hard minimum.
pub fn smooth_min_distance(a: f32, b: f32, k: f32) -> (f32, f32) {
    if k <= 0.0 {
        return if a <= b { (a, 1.0) } else { (b, 0.0) };
    }
    let h = (0.5 + (0.5 * (b - a) / k)).clamp(0.0, 1.0);
    let distance = mix(b, a, h) - (k * h * (1.0 - h));
    (distance, h)
}

/// Smooth union of two surface samples. Every material field is interpolated
/// with the same weight as the distance so colour and shape fuse together.
pub fn smooth_min(a: &Surface, b: &Surface, k: f32) -> Surface {
    let (distance, h) = smooth_min_distance(a.distance, b.distance, k);
    Surface {
        distance,
        material: b.material.lerp(&a.material, h),
    }
}
