use glam::{DVec2, Vec2};
use crate::api::types::{FeatureId, TileId};
use crate::components::particle::Particle;
use crate::style::params::ParticleParams;
use crate::systems::rng::Rng;

/// A fixed spawn point that keeps a bounded population of particles alive.
#[derive(Debug, Clone)]
pub struct Emitter {
    /// Feature the emitter was created for, if known.
    pub feature: Option<FeatureId>,
    /// Projected (mercator) anchor. Identity key for deduplication.
    world_position: DVec2,
    /// Where the feature is drawn within its tile. Replaceable.
    pub location: Vec2,
    /// Tile the feature was last seen in. Replaceable.
    pub tile: TileId,
    /// Zoom of the tile at creation.
    zoom: u8,
    /// Base elevation of the spawn point.
    pub elevation: f32,
    max_population: usize,
    params: ParticleParams,
    particles: Vec<Particle>,
}

impl Emitter {
    pub fn new(
        feature: Option<FeatureId>,
        location: Vec2,
        tile: TileId,
        world_position: DVec2,
        params: ParticleParams,
    ) -> Self {
        let max_population = params.max_population();
        Self {
            feature,
            world_position,
            location,
            tile,
            zoom: tile.z,
            elevation: 1.0,
            max_population,
            params,
            particles: Vec::with_capacity(max_population),
        }
    }

    /// Top up to the population cap, advance every particle, then drop the dead.
    /// Newborns get their first step in the same tick.
    pub fn update(&mut self, now_ms: f64, rng: &mut Rng) {
        while self.particles.len() < self.max_population {
            self.particles.push(Particle::spawn(&self.params, rng, now_ms));
        }
        for particle in &mut self.particles {
            particle.update(now_ms);
        }
        self.particles.retain(Particle::is_alive);
    }

    /// Exact component-wise match on the world anchor.
    pub fn is_at(&self, world_position: DVec2) -> bool {
        self.world_position.x == world_position.x && self.world_position.y == world_position.y
    }

    pub fn world_position(&self) -> DVec2 {
        self.world_position
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn max_population(&self) -> usize {
        self.max_population
    }

    pub fn params(&self) -> &ParticleParams {
        &self.params
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
