pub mod color;
pub mod particle;
pub mod emitter;

pub use color::{Rgb, Rgba};
pub use particle::Particle;
pub use emitter::Emitter;
