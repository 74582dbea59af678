use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{location::GeoCoordinate, shape::ShapePoint, waypoint::Waypoint, ExampleData};

/// A shape to be turned into a walking route around an anchor.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    /// Latitude of the start and end point.
    pub latitude: f64,
    /// Longitude of the start and end point.
    pub longitude: f64,
    /// Outline of the shape, one `[x, y]` pair per vertex.
    pub shape: Vec<ShapePoint>,
    /// Requested length of the route in kilometers.
    pub distance_km: f64,
}

impl RouteRequest {
    pub fn anchor(&self) -> GeoCoordinate {
        GeoCoordinate::new(self.latitude, self.longitude)
    }
}

impl ExampleData for RouteRequest {
    fn example_data() -> Self {
        Self {
            latitude: 35.681236,
            longitude: 139.767125,
            shape: vec![
                ShapePoint::new(2.0, 624.0),
                ShapePoint::new(889.0, 27.0),
                ShapePoint::new(1559.0, 193.0),
                ShapePoint::new(2751.0, 911.0),
                ShapePoint::new(1684.0, 2728.0),
                ShapePoint::new(806.0, 2506.0),
            ],
            distance_km: 10.0,
        }
    }
}

/// A generated route.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RouteResult {
    /// Via-points in walking order, starting at the anchor. The anchor is not
    /// repeated at the end.
    pub waypoints: Vec<Waypoint>,
    /// Walking distance in kilometers as measured by the routing service.
    pub total_distance: f64,
    /// Path geometry as returned by the routing service.
    pub route: serde_json::Value,
}
