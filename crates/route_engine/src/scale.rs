use model::shape::Edge;

use crate::decompose::perimeter;

/// Real paths are assumed to be about 40% longer than the straight lines
/// between their vertices.
pub const DEFAULT_DETOUR_FACTOR: f64 = 1.4;

/// Multiplier turning shape units into kilometers such that the straight-line
/// perimeter equals `target_distance_km / detour_factor`.
///
/// Returns `None` unless the factor is a positive, finite number, e.g. for
/// outlines without length or a non-positive detour factor.
pub fn scale_factor(edges: &[Edge], target_distance_km: f64, detour_factor: f64) -> Option<f64> {
    let raw = perimeter(edges);
    let h = target_distance_km / detour_factor / raw;
    (h.is_finite() && h > 0.0).then_some(h)
}

#[cfg(test)]
mod tests {
    use model::shape::ShapePoint;

    use super::*;
    use crate::decompose::decompose;

    #[test]
    fn scaled_perimeter_matches_target() {
        let edges = decompose(&[
            ShapePoint::new(2.0, 624.0),
            ShapePoint::new(889.0, 27.0),
            ShapePoint::new(1559.0, 193.0),
            ShapePoint::new(2751.0, 911.0),
            ShapePoint::new(1684.0, 2728.0),
            ShapePoint::new(806.0, 2506.0),
        ]);
        let h = scale_factor(&edges, 10.0, DEFAULT_DETOUR_FACTOR).unwrap();
        assert!(h > 0.0);
        assert!((h * perimeter(&edges) - 10.0 / 1.4).abs() < 1e-9);
    }

    #[test]
    fn zero_perimeter_has_no_factor() {
        let edges = decompose(&[ShapePoint::new(4.0, 4.0), ShapePoint::new(4.0, 4.0)]);
        assert_eq!(scale_factor(&edges, 10.0, DEFAULT_DETOUR_FACTOR), None);
        assert_eq!(scale_factor(&[], 10.0, DEFAULT_DETOUR_FACTOR), None);
    }

    #[test]
    fn non_positive_detour_factor_has_no_factor() {
        let edges = decompose(&[ShapePoint::new(0.0, 0.0), ShapePoint::new(3.0, 4.0)]);
        assert_eq!(scale_factor(&edges, 10.0, -1.4), None);
        assert_eq!(scale_factor(&edges, 10.0, 0.0), None);
        assert_eq!(scale_factor(&edges, -10.0, DEFAULT_DETOUR_FACTOR), None);
    }
}
