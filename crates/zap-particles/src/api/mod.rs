pub mod types;
pub mod system;
