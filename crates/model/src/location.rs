use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::geo;

/// A position on the earth in degrees (WGS84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn distance_to(&self, other: &GeoCoordinate) -> f64 {
        geo::haversine_distance(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }

    /// Moves along the compass bearing `bearing_deg` for `distance_km`.
    pub fn destination(&self, bearing_deg: f64, distance_km: f64) -> GeoCoordinate {
        let (latitude, longitude) = geo::destination_point(
            self.latitude,
            self.longitude,
            bearing_deg,
            distance_km,
        );
        GeoCoordinate::new(latitude, longitude)
    }
}

impl From<(f64, f64)> for GeoCoordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}
