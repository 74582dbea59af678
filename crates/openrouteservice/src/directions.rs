use model::waypoint::Waypoint;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ApiError;

/// Request body of the directions endpoint. Coordinates are `[lng, lat]`.
#[derive(Debug, Clone, Serialize)]
pub struct DirectionsRequest {
    pub coordinates: Vec<[f64; 2]>,
}

impl DirectionsRequest {
    pub fn from_waypoints(waypoints: &[Waypoint]) -> Self {
        Self {
            coordinates: waypoints
                .iter()
                .map(|waypoint| [waypoint.lng, waypoint.lat])
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct FeatureCollection {
    features: Vec<RouteFeature>,
}

#[derive(Debug, Clone, Deserialize)]
struct RouteFeature {
    properties: RouteProperties,
}

#[derive(Debug, Clone, Deserialize)]
struct RouteProperties {
    summary: Summary,
}

#[derive(Debug, Clone, Deserialize)]
struct Summary {
    /// Meters. Omitted by the service for zero length routes.
    #[serde(default)]
    distance: f64,
}

/// A walked route as returned by the service.
#[derive(Debug, Clone)]
pub struct Directions {
    /// Total walking distance in kilometers.
    pub distance_km: f64,
    /// The complete GeoJSON feature collection.
    pub geojson: Value,
}

impl Directions {
    pub fn from_geojson(geojson: Value) -> Result<Self, ApiError> {
        let collection: FeatureCollection = serde_json::from_value(geojson.clone())?;
        let summary = collection
            .features
            .into_iter()
            .next()
            .ok_or(ApiError::MissingSummary)?
            .properties
            .summary;

        Ok(Self {
            distance_km: summary.distance / 1000.0,
            geojson,
        })
    }
}
