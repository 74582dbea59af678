use model::{location::GeoCoordinate, shape::Edge};
use serde::Serialize;

/// A shape laid out on the earth around an anchor.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    /// One coordinate per shape vertex, the anchor first.
    pub coordinates: Vec<GeoCoordinate>,
    /// Kilometers per shape unit.
    pub scale_factor: f64,
    /// Straight-line length of the projected ring, back to the anchor included.
    pub perimeter_km: f64,
    /// How far the closing edge, walked from the last vertex, ends up from
    /// the anchor.
    pub closure_drift_km: f64,
}

/// Walks the scaled edges from `anchor`, each step starting where the last
/// one ended. The closing edge is only used to measure the drift; it is
/// never forced back onto the anchor.
pub fn project(anchor: GeoCoordinate, edges: &[Edge], scale_factor: f64) -> Projection {
    let mut coordinates = Vec::with_capacity(edges.len());
    coordinates.push(anchor);

    let (closing, walked) = match edges.split_last() {
        Some((closing, walked)) => (Some(closing), walked),
        None => (None, edges),
    };

    let mut current = anchor;
    for edge in walked {
        current = current.destination(edge.bearing_degrees(), edge.magnitude * scale_factor);
        coordinates.push(current);
    }

    let closure_drift_km = closing
        .map(|edge| {
            current
                .destination(edge.bearing_degrees(), edge.magnitude * scale_factor)
                .distance_to(&anchor)
        })
        .unwrap_or(0.0);

    let perimeter_km: f64 = coordinates
        .iter()
        .zip(coordinates.iter().cycle().skip(1))
        .map(|(from, to)| from.distance_to(to))
        .sum();

    log::debug!(
        "Projected {} vertices, perimeter {:.3} km, closure drift {:.4} km.",
        coordinates.len(),
        perimeter_km,
        closure_drift_km
    );

    Projection {
        coordinates,
        scale_factor,
        perimeter_km,
        closure_drift_km,
    }
}
