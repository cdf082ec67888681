use crate::components::emitter::Emitter;
use crate::renderer::instance::{EmitterBatch, ParticleBuffer, ParticleInstance};

/// Flatten emitters into the particle buffer.
/// Writes one batch per emitter (empty emitters included) so batch index
/// matches registration order.
pub fn build_particle_buffer<'a>(emitters: impl Iterator<Item = &'a Emitter>, buffer: &mut ParticleBuffer) {
    buffer.clear();

    for emitter in emitters {
        let first = buffer.instance_count();
        for p in emitter.particles() {
            buffer.push(ParticleInstance {
                x: p.offset.x,
                y: p.offset.y,
                z: p.offset.z,
                scale: p.scale,
                opacity: p.opacity,
                r: p.color.r,
                g: p.color.g,
                b: p.color.b,
            });
        }

        let world = emitter.world_position();
        buffer.push_batch(EmitterBatch {
            world_x: world.x,
            world_y: world.y,
            location_x: emitter.location.x,
            location_y: emitter.location.y,
            first_instance: first,
            instance_count: buffer.instance_count() - first,
        });
    }
}
