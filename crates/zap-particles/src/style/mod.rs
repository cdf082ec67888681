pub mod paint;
pub mod params;

pub use paint::{EmitterKind, ParticlePaint, PropertyValue};
pub use params::{ParticleParams, RangeMode};
