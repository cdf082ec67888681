pub mod instance;

pub use instance::{EmitterBatch, ParticleBuffer, ParticleInstance};
