//! Birth-time sampling helpers.
//! No dependencies on particles or emitters — just draws and math.

use std::f32::consts::TAU;
use glam::Vec2;
use super::rng::Rng;

/// Uniform draw between `min` and `max`.
/// Reversed or collapsed ranges are accepted and sample `min + u * (max - min)` as-is.
#[inline]
pub fn uniform(rng: &mut Rng, min: f32, max: f32) -> f32 {
    rng.next_f32() * (max - min) + min
}

/// Same as [`uniform`], in f64 (lifetimes are measured in milliseconds).
#[inline]
pub fn uniform_f64(rng: &mut Rng, min: f64, max: f64) -> f64 {
    rng.next_f64() * (max - min) + min
}

/// Planar offset inside the annulus `[min_radius, max_radius]`.
///
/// The radius is `sqrt(u) * (max - min) + min`: the square root keeps the
/// areal density of a full disc uniform instead of clustering points at
/// the centre. With `min_radius > 0` the points lean toward the inner edge.
pub fn disc_offset(rng: &mut Rng, min_radius: f32, max_radius: f32) -> Vec2 {
    let r = rng.next_f32().sqrt() * (max_radius - min_radius) + min_radius;
    let theta = rng.next_f32() * TAU;
    Vec2::new(r * theta.cos(), r * theta.sin())
}
