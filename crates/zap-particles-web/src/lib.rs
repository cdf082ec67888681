//! WASM bridge for zap-particles.
//!
//! The map's frame loop calls `particles_tick()` once per frame and then
//! reads the instance and batch arrays straight out of WASM memory using
//! the pointer/count exports.

pub mod clock;
pub mod runner;

pub use clock::DateClock;
pub use runner::ParticleRunner;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use zap_particles::{DVec2, FeatureId, ParticleInstance, SystemConfig, TileId, Vec2};

thread_local! {
    static RUNNER: RefCell<Option<ParticleRunner<DateClock>>> = const { RefCell::new(None) };
}

fn with_runner<R>(f: impl FnOnce(&mut ParticleRunner<DateClock>) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().expect("Particles not initialized. Call particles_init() first.");
        f(runner)
    })
}

/// Create the particle system. `config_json` may be empty for defaults.
/// Returns false (and keeps defaults) if the config does not parse.
#[wasm_bindgen]
pub fn particles_init(config_json: &str) -> bool {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let (config, ok) = if config_json.trim().is_empty() {
        (SystemConfig::default(), true)
    } else {
        match SystemConfig::from_json(config_json) {
            Ok(config) => (config, true),
            Err(err) => {
                log::warn!("particle config rejected, using defaults: {}", err);
                (SystemConfig::default(), false)
            }
        }
    };

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(ParticleRunner::new(config, DateClock));
    });
    log::info!("zap-particles: initialized");
    ok
}

/// Feature ids cross the JS boundary as numbers. Only non-negative
/// integers that fit a `u64` name a feature.
pub fn feature_id_from_js(id: f64) -> Option<FeatureId> {
    if id.is_finite() && id >= 0.0 && id.fract() == 0.0 && id < u64::MAX as f64 {
        Some(FeatureId(id as u64))
    } else {
        None
    }
}

/// Attach (or refresh) an emitter. A missing `tile_z` means no tile
/// reference; the request is then declined. A feature id that is not a
/// non-negative integer is declined too.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn particles_attach(
    feature_id: Option<f64>,
    location_x: f32,
    location_y: f32,
    tile_z: Option<u8>,
    tile_x: u32,
    tile_y: u32,
    mercator_x: f64,
    mercator_y: f64,
    paint_json: &str,
) -> bool {
    let feature = match feature_id {
        Some(id) => match feature_id_from_js(id) {
            Some(feature) => Some(feature),
            None => {
                log::warn!("particle attach declined: bad feature id {}", id);
                return false;
            }
        },
        None => None,
    };
    let tile = tile_z.map(|z| TileId::new(z, tile_x, tile_y));
    with_runner(|r| {
        r.attach(
            feature,
            Vec2::new(location_x, location_y),
            tile,
            DVec2::new(mercator_x, mercator_y),
            paint_json,
        )
    })
}

#[wasm_bindgen]
pub fn particles_tick() -> bool {
    with_runner(|r| r.tick())
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(|r| r.instances_ptr())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count())
}

#[wasm_bindgen]
pub fn get_batches_ptr() -> *const u8 {
    with_runner(|r| r.batches_ptr())
}

#[wasm_bindgen]
pub fn get_batch_count() -> u32 {
    with_runner(|r| r.batch_count())
}

#[wasm_bindgen]
pub fn get_emitter_count() -> u32 {
    with_runner(|r| r.emitter_count())
}

#[wasm_bindgen]
pub fn get_instance_floats() -> u32 {
    ParticleInstance::FLOATS as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_feature_ids_pass_through() {
        assert_eq!(feature_id_from_js(0.0), Some(FeatureId(0)));
        assert_eq!(feature_id_from_js(12345.0), Some(FeatureId(12345)));
    }

    #[test]
    fn malformed_feature_ids_are_rejected() {
        assert_eq!(feature_id_from_js(-1.0), None);
        assert_eq!(feature_id_from_js(2.5), None);
        assert_eq!(feature_id_from_js(f64::NAN), None);
        assert_eq!(feature_id_from_js(f64::INFINITY), None);
        assert_eq!(feature_id_from_js(1.0e20), None);
    }
}
