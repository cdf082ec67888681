pub mod rng;
pub mod sampling;
pub mod render;

pub use rng::Rng;
