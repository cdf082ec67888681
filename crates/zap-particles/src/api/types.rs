/// Identifier of the map feature an emitter was created for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeatureId(pub u64);

/// Canonical tile address (zoom, column, row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileId {
    pub z: u8,
    pub x: u32,
    pub y: u32,
}

impl TileId {
    pub const fn new(z: u8, x: u32, y: u32) -> Self {
        Self { z, x, y }
    }
}

/// What `ParticleSystem::attach` did with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachOutcome {
    /// No tile reference; nothing changed.
    Declined,
    /// An emitter already sits at that world position; its display
    /// location and tile were replaced, its particles left alone.
    Refreshed,
    /// A new emitter was registered.
    Created,
}
