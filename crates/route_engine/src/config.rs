use std::{env, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::scale::DEFAULT_DETOUR_FACTOR;

/// Radius around each projected vertex searched for landmarks.
pub const DEFAULT_SNAP_RADIUS_M: f64 = 300.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    /// Ratio between walked distance and straight-line perimeter.
    pub detour_factor: f64,
    pub snap_radius_m: f64,
    /// Number of landmark searches in flight at once. 1 searches vertex by vertex.
    pub snap_concurrency: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            detour_factor: DEFAULT_DETOUR_FACTOR,
            snap_radius_m: DEFAULT_SNAP_RADIUS_M,
            snap_concurrency: 1,
        }
    }
}

impl EngineConfig {
    /// Reads `DETOUR_FACTOR`, `SNAP_RADIUS_M` and `SNAP_CONCURRENCY`. Missing,
    /// unparsable or non-positive values keep their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            detour_factor: positive_or(env::var("DETOUR_FACTOR").ok(), defaults.detour_factor),
            snap_radius_m: positive_or(env::var("SNAP_RADIUS_M").ok(), defaults.snap_radius_m),
            snap_concurrency: parse_or(env::var("SNAP_CONCURRENCY").ok(), defaults.snap_concurrency)
                .max(1),
        }
    }
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

fn positive_or(value: Option<String>, default: f64) -> f64 {
    match value.and_then(|value| value.parse::<f64>().ok()) {
        Some(value) if value.is_finite() && value > 0.0 => value,
        _ => default,
    }
}
