//! Resolved birth parameters for one emitter.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use crate::components::color::{Rgb, Rgba};
use super::paint::{EmitterKind, ParticlePaint};

/// How the upper bound of the elevation and velocity ranges is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeMode {
    /// Read both bounds of the elevation and velocity ranges from the
    /// `-min` property. The ranges collapse to their minimum; styles in the
    /// wild are tuned against this.
    #[default]
    Legacy,
    /// Read each upper bound from its `-max` property.
    Paired,
}

/// Immutable snapshot of everything a particle needs at birth.
/// Built once per emitter; later paint changes do not reach live emitters.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleParams {
    pub kind: EmitterKind,
    /// Planar disc radius range.
    pub offset_range: (f32, f32),
    pub elevation_range: (f32, f32),
    pub direction: Vec3,
    pub velocity_range: (f32, f32),
    pub scale_range: (f32, f32),
    /// Lifetime range in milliseconds. Non-positive draws mean "never expires".
    pub ttl_range: (f64, f64),
    pub color_start: Rgba,
    pub color_end: Rgba,
}

impl ParticleParams {
    pub fn from_paint(paint: &ParticlePaint, mode: RangeMode) -> Self {
        let kind = paint.kind();

        let elevation_min = paint.elevation_min.constant_or(0.0);
        let velocity_min = paint.velocity_min.constant_or(0.0);
        let (elevation_max, velocity_max) = match mode {
            RangeMode::Legacy => (elevation_min, velocity_min),
            RangeMode::Paired => (
                paint.elevation_max.constant_or(0.0),
                paint.velocity_max.constant_or(0.0),
            ),
        };

        Self {
            kind,
            offset_range: (
                paint.offset_min.constant_or(0.0),
                paint.offset_max.constant_or(0.0),
            ),
            elevation_range: (elevation_min, elevation_max),
            direction: Vec3::from_array(paint.direction.unwrap_or([0.0; 3])),
            velocity_range: (velocity_min, velocity_max),
            scale_range: kind.scale_range(),
            ttl_range: (
                paint.ttl_min.constant_or(-1.0),
                paint.ttl_max.constant_or(-1.0),
            ),
            color_start: paint.color_start.constant_or(Rgba::WHITE),
            color_end: paint.color_end.constant_or(Rgba::WHITE),
        }
    }

    pub fn max_population(&self) -> usize {
        self.kind.max_population()
    }

    /// Birth color for a given bias in [0, 1]: 0 is the start color, 1 the end color.
    pub fn birth_color(&self, bias: f32) -> Rgb {
        Rgb::lerp(self.color_start, self.color_end, bias)
    }
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self::from_paint(&ParticlePaint::default(), RangeMode::default())
    }
}
