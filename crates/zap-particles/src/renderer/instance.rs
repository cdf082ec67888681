use bytemuck::{Pod, Zeroable};

/// Per-particle render data read by the JS renderer.
/// Must match the TypeScript layout: 8 floats = 32 bytes stride.
///
/// Offsets are relative to the owning emitter's world position;
/// see [`EmitterBatch`].
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    /// Planar offset, x.
    pub x: f32,
    /// Planar offset, y.
    pub y: f32,
    /// Elevation offset.
    pub z: f32,
    pub scale: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub opacity: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl ParticleInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// One emitter's slice of the instance array.
/// 32 bytes: world x/y as f64, then location and range.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct EmitterBatch {
    /// Mercator anchor, x.
    pub world_x: f64,
    /// Mercator anchor, y.
    pub world_y: f64,
    /// Display location within the tile, x.
    pub location_x: f32,
    /// Display location within the tile, y.
    pub location_y: f32,
    /// Index of the emitter's first instance.
    pub first_instance: u32,
    pub instance_count: u32,
}

impl EmitterBatch {
    pub const STRIDE_BYTES: usize = 32;
}

/// Particle instances for one frame, grouped by emitter.
pub struct ParticleBuffer {
    pub instances: Vec<ParticleInstance>,
    /// One batch per emitter, in registration order.
    pub batches: Vec<EmitterBatch>,
}

impl ParticleBuffer {
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    pub fn with_capacity(max_instances: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max_instances),
            batches: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.batches.clear();
    }

    pub fn push(&mut self, instance: ParticleInstance) {
        self.instances.push(instance);
    }

    pub fn push_batch(&mut self, batch: EmitterBatch) {
        self.batches.push(batch);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn batch_count(&self) -> u32 {
        self.batches.len() as u32
    }

    /// Raw pointer to instance data for zero-copy reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    /// Raw pointer to batch data for zero-copy reads.
    pub fn batches_ptr(&self) -> *const u8 {
        self.batches.as_ptr() as *const u8
    }

    /// Instance data as raw bytes.
    pub fn instance_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for ParticleBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particle_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<ParticleInstance>(), ParticleInstance::STRIDE_BYTES);
        assert_eq!(ParticleInstance::FLOATS, 8);
    }

    #[test]
    fn emitter_batch_is_32_bytes() {
        assert_eq!(std::mem::size_of::<EmitterBatch>(), EmitterBatch::STRIDE_BYTES);
    }

    #[test]
    fn buffer_push_and_clear() {
        let mut buf = ParticleBuffer::new();
        buf.push(ParticleInstance::default());
        buf.push(ParticleInstance::default());
        buf.push_batch(EmitterBatch::default());
        assert_eq!(buf.instance_count(), 2);
        assert_eq!(buf.batch_count(), 1);
        assert_eq!(buf.instance_bytes().len(), 64);
        buf.clear();
        assert_eq!(buf.instance_count(), 0);
        assert_eq!(buf.batch_count(), 0);
    }
}
