//! Headless particle simulation for effects anchored to map features.
//!
//! A [`ParticleSystem`] owns a list of [`Emitter`]s, each pinned to a world
//! (mercator) position and keeping a bounded population of [`Particle`]s
//! alive. The host drives it with [`ParticleSystem::tick`] once per frame
//! and reads the result back through [`build_particle_buffer`].

pub mod api;
pub mod core;
pub mod components;
pub mod style;
pub mod systems;
pub mod renderer;

// Re-export key types at crate root for convenience
pub use api::system::{ParticleSystem, SystemConfig};
pub use api::types::{AttachOutcome, FeatureId, TileId};
pub use components::color::{Rgb, Rgba};
pub use components::emitter::Emitter;
pub use components::particle::{Particle, opacity_envelope};
pub use crate::core::time::{Clock, ManualClock, SystemClock, TickThrottle};
pub use style::paint::{EmitterKind, ParticlePaint, PropertyValue};
pub use style::params::{ParticleParams, RangeMode};
pub use systems::rng::Rng;
pub use systems::render::build_particle_buffer;
pub use renderer::instance::{EmitterBatch, ParticleBuffer, ParticleInstance};
pub use glam::{DVec2, Vec2, Vec3};
