use glam::{DVec2, Vec2};
use serde::{Deserialize, Serialize};
use crate::api::types::{AttachOutcome, FeatureId, TileId};
use crate::components::emitter::Emitter;
use crate::core::time::{Clock, SystemClock, TickThrottle};
use crate::style::paint::ParticlePaint;
use crate::style::params::{ParticleParams, RangeMode};
use crate::systems::rng::Rng;

/// Configuration for a particle system, provided by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Minimum time between accepted ticks in milliseconds (default: 10).
    pub min_tick_interval_ms: f64,
    /// RNG seed for birth sampling (default: 42).
    pub seed: u64,
    /// How elevation/velocity ranges are read from paint (default: legacy).
    pub range_mode: RangeMode,
    /// Initial capacity of the emitter list (default: 64).
    pub emitter_capacity: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            min_tick_interval_ms: 10.0,
            seed: 42,
            range_mode: RangeMode::Legacy,
            emitter_capacity: 64,
        }
    }
}

impl SystemConfig {
    /// Parse a config from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Owner of every emitter. The host's frame loop calls [`tick`](Self::tick)
/// once per frame; map-feature processing calls [`attach`](Self::attach)
/// between ticks.
pub struct ParticleSystem<C: Clock = SystemClock> {
    emitters: Vec<Emitter>,
    throttle: TickThrottle,
    rng: Rng,
    clock: C,
    config: SystemConfig,
}

impl ParticleSystem<SystemClock> {
    pub fn new(config: SystemConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for ParticleSystem<SystemClock> {
    fn default() -> Self {
        Self::new(SystemConfig::default())
    }
}

impl<C: Clock> ParticleSystem<C> {
    /// Create a system reading time from `clock`.
    /// A tick within the minimum interval of construction is a no-op.
    pub fn with_clock(config: SystemConfig, clock: C) -> Self {
        let throttle = TickThrottle::new(config.min_tick_interval_ms, clock.now_ms());
        Self {
            emitters: Vec::with_capacity(config.emitter_capacity),
            throttle,
            rng: Rng::new(config.seed),
            clock,
            config,
        }
    }

    /// Advance every emitter, in registration order, unless the previous
    /// tick was less than the minimum interval ago. Returns whether it ran.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now_ms();
        self.tick_at(now)
    }

    /// [`tick`](Self::tick) with an explicit timestamp in milliseconds.
    pub fn tick_at(&mut self, now_ms: f64) -> bool {
        if !self.throttle.try_advance(now_ms) {
            return false;
        }
        for emitter in &mut self.emitters {
            emitter.update(now_ms, &mut self.rng);
        }
        true
    }

    /// Register a spawn point for a feature.
    ///
    /// Declines when `tile` is absent. If an emitter already sits at exactly
    /// `world_position`, only its display location and tile are replaced so
    /// its animation carries on; `feature` and `paint` are ignored then.
    pub fn attach(
        &mut self,
        feature: Option<FeatureId>,
        location: Vec2,
        tile: Option<TileId>,
        world_position: DVec2,
        paint: &ParticlePaint,
    ) -> AttachOutcome {
        let tile = match tile {
            Some(t) => t,
            None => {
                log::debug!("attach declined: no tile for {:?}", world_position);
                return AttachOutcome::Declined;
            }
        };

        if let Some(existing) = self.emitters.iter_mut().find(|e| e.is_at(world_position)) {
            existing.location = location;
            existing.tile = tile;
            log::trace!("emitter at {:?} refreshed from tile {:?}", world_position, tile);
            return AttachOutcome::Refreshed;
        }

        let params = ParticleParams::from_paint(paint, self.config.range_mode);
        log::debug!(
            "emitter #{} created at {:?} ({:?}, cap {})",
            self.emitters.len(),
            world_position,
            params.kind,
            params.max_population(),
        );
        self.emitters
            .push(Emitter::new(feature, location, tile, world_position, params));
        AttachOutcome::Created
    }

    /// All emitters in registration order.
    pub fn emitters(&self) -> &[Emitter] {
        &self.emitters
    }

    /// Find the emitter anchored at exactly `world_position`.
    pub fn emitter_at(&self, world_position: DVec2) -> Option<&Emitter> {
        self.emitters.iter().find(|e| e.is_at(world_position))
    }

    pub fn emitter_count(&self) -> usize {
        self.emitters.len()
    }

    /// Total live particles across all emitters.
    pub fn particle_count(&self) -> usize {
        self.emitters.iter().map(Emitter::len).sum()
    }

    /// Time of the last accepted tick (or of construction).
    pub fn last_tick_ms(&self) -> f64 {
        self.throttle.last_tick_ms()
    }

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
