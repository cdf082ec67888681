//! A single simulated particle: birth sampling, fade envelope, motion.

use glam::Vec3;
use crate::components::color::Rgb;
use crate::style::params::ParticleParams;
use crate::systems::rng::Rng;
use crate::systems::sampling::{disc_offset, uniform, uniform_f64};

/// Length of the fade-in and fade-out ramps, in life position.
pub const FADE_SPAN: f64 = 0.2;
/// Life position at which the fade-out starts.
pub const FADE_OUT_START: f64 = 0.8;
/// Life position reported for particles without a positive lifetime.
pub const IMMORTAL_LIFE_POSITION: f64 = 0.5;

/// Piecewise-linear opacity over normalized life.
/// Ramps up over the first fifth, holds at 1, ramps down over the last fifth.
#[inline]
pub fn opacity_envelope(life_position: f64) -> f32 {
    let opacity = if life_position < FADE_SPAN {
        life_position / FADE_SPAN
    } else if life_position > FADE_OUT_START {
        (1.0 - life_position) / FADE_SPAN
    } else {
        1.0
    };
    opacity as f32
}

/// A single particle with lifecycle and rendering state.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Offset from the emitter's world position (x, y, elevation).
    pub offset: Vec3,
    /// Motion direction, taken verbatim from the style.
    pub direction: Vec3,
    /// Distance travelled along `direction` per tick.
    pub velocity: f32,
    /// Birth time in milliseconds.
    pub birth_time: f64,
    /// Lifetime in milliseconds. Non-positive means the particle never expires on its own.
    pub time_to_live: f64,
    pub scale: f32,
    pub opacity: f32,
    /// Fixed at birth.
    pub color: Rgb,
    alive: bool,
}

impl Particle {
    /// Sample a new particle from the emitter's parameters.
    pub fn spawn(params: &ParticleParams, rng: &mut Rng, now_ms: f64) -> Self {
        let planar = disc_offset(rng, params.offset_range.0, params.offset_range.1);
        let elevation = uniform(rng, params.elevation_range.0, params.elevation_range.1);
        let velocity = uniform(rng, params.velocity_range.0, params.velocity_range.1);
        let scale = uniform(rng, params.scale_range.0, params.scale_range.1);
        let time_to_live = uniform_f64(rng, params.ttl_range.0, params.ttl_range.1);
        // Squared draw: most particles stay close to the start color.
        let bias = rng.next_f32().powi(2);

        Particle {
            offset: planar.extend(elevation),
            direction: params.direction,
            velocity,
            birth_time: now_ms,
            time_to_live,
            scale,
            opacity: 1.0,
            color: params.birth_color(bias),
            alive: true,
        }
    }

    /// Normalized age: 0 at birth, 1 at death.
    pub fn life_position(&self, now_ms: f64) -> f64 {
        if self.time_to_live > 0.0 {
            (now_ms - self.birth_time) / self.time_to_live
        } else {
            IMMORTAL_LIFE_POSITION
        }
    }

    /// Advance one tick: age, fade, then move one step along `direction`.
    /// Motion is per tick, not scaled by elapsed time.
    pub fn update(&mut self, now_ms: f64) {
        let life = self.life_position(now_ms);
        if life >= 1.0 {
            self.alive = false;
        }
        self.opacity = opacity_envelope(life);
        self.offset += self.direction * self.velocity;
    }

    /// Once false, stays false.
    pub fn is_alive(&self) -> bool {
        self.alive
    }
}
