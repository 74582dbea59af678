use schemars::{gen::SchemaGenerator, schema::Schema, JsonSchema};
use serde::{Deserialize, Serialize};

/// A vertex of a shape outline in shape-local units. The y axis grows
/// downwards, like image coordinates.
///
/// On the wire a point is a plain `[x, y]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct ShapePoint {
    pub x: f64,
    pub y: f64,
}

impl ShapePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for ShapePoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<ShapePoint> for (f64, f64) {
    fn from(point: ShapePoint) -> Self {
        (point.x, point.y)
    }
}

impl JsonSchema for ShapePoint {
    fn schema_name() -> String {
        "ShapePoint".to_owned()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        <(f64, f64)>::json_schema(gen)
    }
}

/// One side of a shape outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Edge {
    /// Radians in [0, 2π), clockwise from "up" (negative y).
    pub bearing: f64,
    /// Euclidean length in shape units.
    pub magnitude: f64,
}

impl Edge {
    pub fn between(from: &ShapePoint, to: &ShapePoint) -> Self {
        let dx = to.x - from.x;
        let dy = to.y - from.y;

        let mut bearing = dx.atan2(-dy);
        if bearing < 0.0 {
            bearing += 2.0 * std::f64::consts::PI;
        }

        Self {
            bearing,
            magnitude: (dx * dx + dy * dy).sqrt(),
        }
    }

    /// Bearing as a compass angle in degrees, "up" being north.
    pub fn bearing_degrees(&self) -> f64 {
        self.bearing.to_degrees()
    }

    /// Displacement (dx, dy) this edge describes in shape space.
    pub fn displacement(&self) -> (f64, f64) {
        (
            self.magnitude * self.bearing.sin(),
            -self.magnitude * self.bearing.cos(),
        )
    }
}
