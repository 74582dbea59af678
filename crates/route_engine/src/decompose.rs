use itertools::Itertools;
use model::shape::{Edge, ShapePoint};

/// Splits a closed outline into its edges, one per vertex. The last edge
/// leads from the last vertex back to the first.
pub fn decompose(points: &[ShapePoint]) -> Vec<Edge> {
    if points.len() < 2 {
        return vec![];
    }
    points
        .iter()
        .circular_tuple_windows()
        .map(|(from, to)| Edge::between(from, to))
        .collect()
}

pub fn perimeter(edges: &[Edge]) -> f64 {
    edges.iter().map(|edge| edge.magnitude).sum()
}
