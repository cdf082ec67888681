use zap_particles::{
    AttachOutcome, Clock, DVec2, FeatureId, ParticleBuffer, ParticlePaint,
    ParticleSystem, SystemConfig, TileId, Vec2,
};
use zap_particles::build_particle_buffer;

/// Wires a particle system to the buffers the JS renderer reads.
///
/// `lib.rs` keeps one runner in a `thread_local!` and exports free
/// functions via `#[wasm_bindgen]`; the runner itself is plain Rust so
/// it can be tested natively.
pub struct ParticleRunner<C: Clock> {
    system: ParticleSystem<C>,
    buffer: ParticleBuffer,
}

impl<C: Clock> ParticleRunner<C> {
    pub fn new(config: SystemConfig, clock: C) -> Self {
        Self {
            system: ParticleSystem::with_clock(config, clock),
            buffer: ParticleBuffer::new(),
        }
    }

    /// Attach an emitter from a paint JSON payload.
    /// Returns false when declined (no tile) or when a new emitter's paint
    /// does not parse. Refreshing an existing emitter never reads the paint.
    pub fn attach(
        &mut self,
        feature: Option<FeatureId>,
        location: Vec2,
        tile: Option<TileId>,
        world_position: DVec2,
        paint_json: &str,
    ) -> bool {
        if tile.is_some() && self.system.emitter_at(world_position).is_some() {
            let outcome = self.system.attach(
                feature,
                location,
                tile,
                world_position,
                &ParticlePaint::default(),
            );
            return outcome == AttachOutcome::Refreshed;
        }

        let paint = match ParticlePaint::from_json(paint_json) {
            Ok(p) => p,
            Err(err) => {
                log::warn!("particle paint rejected: {}", err);
                return false;
            }
        };
        self.system.attach(feature, location, tile, world_position, &paint) != AttachOutcome::Declined
    }

    /// Run one frame: tick the system and, if the tick ran, rebuild the buffer.
    pub fn tick(&mut self) -> bool {
        if !self.system.tick() {
            return false;
        }
        build_particle_buffer(self.system.emitters().iter(), &mut self.buffer);
        true
    }

    pub fn system(&self) -> &ParticleSystem<C> {
        &self.system
    }

    pub fn buffer(&self) -> &ParticleBuffer {
        &self.buffer
    }

    // ---- Pointer accessors for zero-copy reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.buffer.instance_count()
    }

    pub fn batches_ptr(&self) -> *const u8 {
        self.buffer.batches_ptr()
    }

    pub fn batch_count(&self) -> u32 {
        self.buffer.batch_count()
    }

    pub fn emitter_count(&self) -> u32 {
        self.system.emitter_count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zap_particles::ManualClock;

    const TILE: Option<TileId> = Some(TileId::new(2, 1, 1));
    const CLOUD: &str = r#"{ "particle-emitter-type": "cloud" }"#;

    fn runner() -> (ParticleRunner<ManualClock>, ManualClock) {
        let clock = ManualClock::new(1000.0);
        (ParticleRunner::new(SystemConfig::default(), clock.clone()), clock)
    }

    #[test]
    fn tick_builds_buffer() {
        let (mut r, clock) = runner();
        assert!(r.attach(None, Vec2::ZERO, TILE, DVec2::new(0.5, 0.5), CLOUD));
        clock.advance(16.0);
        assert!(r.tick());
        assert_eq!(r.instance_count(), 100);
        assert_eq!(r.batch_count(), 1);
        assert_eq!(r.emitter_count(), 1);
    }

    #[test]
    fn throttled_tick_keeps_previous_buffer() {
        let (mut r, clock) = runner();
        r.attach(None, Vec2::ZERO, TILE, DVec2::ZERO, CLOUD);
        clock.advance(16.0);
        assert!(r.tick());
        r.attach(None, Vec2::ZERO, TILE, DVec2::new(1.0, 1.0), "{}");
        clock.advance(2.0);
        assert!(!r.tick());
        assert_eq!(r.batch_count(), 1);
        clock.advance(10.0);
        assert!(r.tick());
        assert_eq!(r.batch_count(), 2);
        assert_eq!(r.instance_count(), 350);
    }

    #[test]
    fn bad_paint_is_declined() {
        let (mut r, _) = runner();
        assert!(!r.attach(None, Vec2::ZERO, TILE, DVec2::ZERO, "not json"));
        assert_eq!(r.emitter_count(), 0);
    }

    #[test]
    fn missing_tile_is_declined() {
        let (mut r, _) = runner();
        assert!(!r.attach(None, Vec2::ZERO, None, DVec2::ZERO, CLOUD));
        assert_eq!(r.emitter_count(), 0);
    }

    #[test]
    fn refresh_ignores_unparsable_paint() {
        let (mut r, _) = runner();
        assert!(r.attach(None, Vec2::ZERO, TILE, DVec2::ZERO, "{}"));

        let moved = Some(TileId::new(3, 2, 2));
        let wrong_shape = r#"{ "particle-emitter-direction": [1, 0] }"#;
        assert!(r.attach(None, Vec2::new(7.0, 7.0), moved, DVec2::ZERO, wrong_shape));
        assert!(r.attach(None, Vec2::new(8.0, 8.0), moved, DVec2::ZERO, "not json"));

        let e = &r.system().emitters()[0];
        assert_eq!(r.emitter_count(), 1);
        assert_eq!(e.location, Vec2::new(8.0, 8.0));
        assert_eq!(e.tile, TileId::new(3, 2, 2));
    }

    #[test]
    fn unparsable_paint_still_declines_new_emitters() {
        let (mut r, _) = runner();
        assert!(r.attach(None, Vec2::ZERO, TILE, DVec2::ZERO, "{}"));
        let wrong_shape = r#"{ "particle-emitter-direction": [1, 0] }"#;
        assert!(!r.attach(None, Vec2::ZERO, TILE, DVec2::new(0.5, 0.5), wrong_shape));
        assert_eq!(r.emitter_count(), 1);
    }

    #[test]
    fn refresh_counts_as_accepted() {
        let (mut r, _) = runner();
        assert!(r.attach(Some(FeatureId(1)), Vec2::ZERO, TILE, DVec2::ZERO, CLOUD));
        assert!(r.attach(Some(FeatureId(1)), Vec2::new(5.0, 5.0), TILE, DVec2::ZERO, CLOUD));
        assert_eq!(r.emitter_count(), 1);
        assert_eq!(r.system().emitters()[0].location, Vec2::new(5.0, 5.0));
    }
}
