//! Paint properties that drive particle emitters.
//! Loaded from the evaluated layer paint as JSON, keyed by property name.

use serde::{Deserialize, Serialize};
use crate::components::color::Rgba;

/// A paint property as seen by the particle core.
///
/// Only constants are usable at birth time; data-driven expressions are
/// kept verbatim and resolve to the caller's default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue<T> {
    /// Property missing or `null`.
    Undefined,
    /// A concrete value.
    Constant(T),
    /// A data-driven value the core cannot evaluate.
    Expression(serde_json::Value),
}

impl<T> Default for PropertyValue<T> {
    fn default() -> Self {
        PropertyValue::Undefined
    }
}

impl<T: Clone> PropertyValue<T> {
    /// The constant value, or `default` when undefined or data-driven.
    pub fn constant_or(&self, default: T) -> T {
        match self {
            PropertyValue::Constant(v) => v.clone(),
            _ => default,
        }
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, PropertyValue::Constant(_))
    }
}

/// Visual family of an emitter. Decides population cap and particle scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmitterKind {
    /// Large, sparse puffs.
    Cloud,
    /// Anything else (rain, snow, sparks...).
    #[default]
    Other,
}

impl EmitterKind {
    pub const CLOUD_MAX_POPULATION: usize = 100;
    pub const DEFAULT_MAX_POPULATION: usize = 250;

    /// Map the `particle-emitter-type` value. Only `"cloud"` is special.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("cloud") => EmitterKind::Cloud,
            _ => EmitterKind::Other,
        }
    }

    pub fn max_population(self) -> usize {
        match self {
            EmitterKind::Cloud => Self::CLOUD_MAX_POPULATION,
            EmitterKind::Other => Self::DEFAULT_MAX_POPULATION,
        }
    }

    /// Inclusive `(min, max)` range particle scale is drawn from.
    pub fn scale_range(self) -> (f32, f32) {
        match self {
            EmitterKind::Cloud => (10.0, 30.0),
            EmitterKind::Other => (0.5, 3.0),
        }
    }
}

/// The `particle-*` paint properties of one layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParticlePaint {
    #[serde(rename = "particle-emitter-type", default)]
    pub emitter_type: Option<String>,
    #[serde(rename = "particle-emitter-offset-min", default)]
    pub offset_min: PropertyValue<f32>,
    #[serde(rename = "particle-emitter-offset-max", default)]
    pub offset_max: PropertyValue<f32>,
    #[serde(rename = "particle-emitter-elevation-min", default)]
    pub elevation_min: PropertyValue<f32>,
    #[serde(rename = "particle-emitter-elevation-max", default)]
    pub elevation_max: PropertyValue<f32>,
    /// Raw 3-vector, used verbatim (never normalized).
    #[serde(rename = "particle-emitter-direction", default)]
    pub direction: Option<[f32; 3]>,
    #[serde(rename = "particle-emitter-velocity-min", default)]
    pub velocity_min: PropertyValue<f32>,
    #[serde(rename = "particle-emitter-velocity-max", default)]
    pub velocity_max: PropertyValue<f32>,
    #[serde(rename = "particle-emitter-ttl-min", default)]
    pub ttl_min: PropertyValue<f64>,
    #[serde(rename = "particle-emitter-ttl-max", default)]
    pub ttl_max: PropertyValue<f64>,
    #[serde(rename = "particle-color-start", default)]
    pub color_start: PropertyValue<Rgba>,
    #[serde(rename = "particle-color-end", default)]
    pub color_end: PropertyValue<Rgba>,
}

impl ParticlePaint {
    /// Parse paint properties from a JSON object string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn kind(&self) -> EmitterKind {
        EmitterKind::from_name(self.emitter_type.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_paint() {
        let json = r#"{
            "particle-emitter-type": "cloud",
            "particle-emitter-offset-min": 1.5,
            "particle-emitter-offset-max": 4.0,
            "particle-emitter-direction": [0.0, 0.5, 1.0],
            "particle-emitter-ttl-min": 1000,
            "particle-emitter-ttl-max": 3000,
            "particle-color-start": { "r": 1.0, "g": 0.0, "b": 0.0, "a": 1.0 },
            "particle-color-end": { "r": 0.0, "g": 0.0, "b": 1.0 }
        }"#;
        let paint = ParticlePaint::from_json(json).unwrap();
        assert_eq!(paint.kind(), EmitterKind::Cloud);
        assert_eq!(paint.offset_min, PropertyValue::Constant(1.5));
        assert_eq!(paint.offset_max.constant_or(0.0), 4.0);
        assert_eq!(paint.direction, Some([0.0, 0.5, 1.0]));
        assert_eq!(paint.ttl_max.constant_or(-1.0), 3000.0);
        assert_eq!(paint.color_end.constant_or(Rgba::WHITE), Rgba::new(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn missing_properties_are_undefined() {
        let paint = ParticlePaint::from_json("{}").unwrap();
        assert_eq!(paint.kind(), EmitterKind::Other);
        assert_eq!(paint.velocity_min, PropertyValue::Undefined);
        assert_eq!(paint.ttl_min.constant_or(-1.0), -1.0);
        assert!(paint.direction.is_none());
    }

    #[test]
    fn null_is_undefined() {
        let paint = ParticlePaint::from_json(r#"{ "particle-emitter-offset-min": null }"#).unwrap();
        assert_eq!(paint.offset_min, PropertyValue::Undefined);
    }

    #[test]
    fn expressions_fall_back_to_default() {
        let json = r#"{ "particle-emitter-velocity-min": ["get", "speed"] }"#;
        let paint = ParticlePaint::from_json(json).unwrap();
        assert!(!paint.velocity_min.is_constant());
        assert!(matches!(paint.velocity_min, PropertyValue::Expression(_)));
        assert_eq!(paint.velocity_min.constant_or(0.25), 0.25);
    }

    #[test]
    fn unknown_type_is_other() {
        assert_eq!(EmitterKind::from_name(Some("rain")), EmitterKind::Other);
        assert_eq!(EmitterKind::from_name(None), EmitterKind::Other);
        assert_eq!(EmitterKind::Cloud.max_population(), 100);
        assert_eq!(EmitterKind::Other.max_population(), 250);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(ParticlePaint::from_json("{ not json").is_err());
    }
}
