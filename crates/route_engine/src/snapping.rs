use async_trait::async_trait;
use futures::{stream, StreamExt};
use model::{
    feature::{Feature, FeatureKind},
    location::GeoCoordinate,
    waypoint::Waypoint,
};
use overpass::client::OverpassClient;

use crate::BoxError;

/// Tag keys and values of places that make good running landmarks.
pub const RUNNING_FRIENDLY_TYPES: [&str; 23] = [
    "park",
    "playground",
    "garden",
    "sports_centre",
    "stadium",
    "school",
    "university",
    "college",
    "public_building",
    "station",
    "bus_stop",
    "subway_entrance",
    "cafe",
    "restaurant",
    "convenience",
    "supermarket",
    "mall",
    "landmark",
    "attraction",
    "memorial",
    "monument",
    "viewpoint",
    "tourism",
];

/// Source of named features around a location.
#[async_trait]
pub trait PlaceSearch: Send + Sync {
    async fn named_features_around(
        &self,
        location: &GeoCoordinate,
        radius_m: f64,
    ) -> Result<Vec<Feature>, BoxError>;
}

#[async_trait]
impl<T: PlaceSearch + ?Sized> PlaceSearch for Box<T> {
    async fn named_features_around(
        &self,
        location: &GeoCoordinate,
        radius_m: f64,
    ) -> Result<Vec<Feature>, BoxError> {
        (**self).named_features_around(location, radius_m).await
    }
}

#[async_trait]
impl PlaceSearch for OverpassClient {
    async fn named_features_around(
        &self,
        location: &GeoCoordinate,
        radius_m: f64,
    ) -> Result<Vec<Feature>, BoxError> {
        OverpassClient::named_features_around(self, location, radius_m)
            .await
            .map_err(|why| Box::new(why) as BoxError)
    }
}

fn is_running_friendly(text: &str) -> bool {
    RUNNING_FRIENDLY_TYPES.contains(&text)
}

/// How good a landmark a feature makes. Higher is better.
pub fn score(feature: &Feature) -> i32 {
    let mut score = 0;

    if feature.name().is_some() {
        score += 10;
    }

    for (key, value) in feature.tags.iter() {
        if is_running_friendly(key) || is_running_friendly(value) {
            score += 5;
        }
    }

    if feature.has_tag("leisure", "park")
        || feature.has_tag("amenity", "school")
        || feature.has_tag("amenity", "university")
    {
        score += 3;
    }

    // nodes are usually smaller places than ways or relations
    if feature.kind == FeatureKind::Point {
        score -= 2;
    }

    score
}

/// The highest scoring feature. Among equal scores the first one wins.
pub fn best_feature(features: &[Feature]) -> Option<&Feature> {
    let mut best: Option<(i32, &Feature)> = None;
    for feature in features {
        let score = score(feature);
        match best {
            Some((best_score, _)) if best_score >= score => {}
            _ => best = Some((score, feature)),
        }
    }
    best.map(|(_, feature)| feature)
}

fn feature_waypoint(feature: &Feature) -> Waypoint {
    let name = match feature.name() {
        Some(name) => name.to_owned(),
        None => format!(
            "Point at {:.6}, {:.6}",
            feature.location.latitude, feature.location.longitude
        ),
    };
    Waypoint::new(name, feature.location)
}

/// Replaces `location` by the best landmark within `radius_m` meters. Falls
/// back to a synthetic waypoint at `location` when there is none or the
/// search fails.
pub async fn snap<S: PlaceSearch + ?Sized>(
    search: &S,
    location: &GeoCoordinate,
    radius_m: f64,
) -> Waypoint {
    let features = match search.named_features_around(location, radius_m).await {
        Ok(features) => features,
        Err(why) => {
            log::warn!(
                "Landmark search around {}, {} failed: {}",
                location.latitude,
                location.longitude,
                why
            );
            vec![]
        }
    };

    match best_feature(&features) {
        Some(feature) => {
            let waypoint = feature_waypoint(feature);
            log::debug!(
                "Snapped {}, {} to '{}' ({:.0} m away).",
                location.latitude,
                location.longitude,
                waypoint.name,
                feature.location.distance_to(location) * 1000.0
            );
            waypoint
        }
        None => Waypoint::synthetic(*location),
    }
}

/// Snaps every location, keeping their order. At most `concurrency`
/// searches run at the same time.
pub async fn snap_all<S: PlaceSearch + ?Sized>(
    search: &S,
    locations: &[GeoCoordinate],
    radius_m: f64,
    concurrency: usize,
) -> Vec<Waypoint> {
    stream::iter(locations.iter().copied())
        .map(|location| async move { snap(search, &location, radius_m).await })
        .buffered(concurrency.max(1))
        .collect()
        .await
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        sync::atomic::{AtomicUsize, Ordering},
    };

    use super::*;

    fn feature(kind: FeatureKind, tags: &[(&str, &str)]) -> Feature {
        Feature::new(
            kind,
            GeoCoordinate::new(35.68, 139.76),
            tags.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        )
    }

    struct FixedSearch(Vec<Feature>);

    #[async_trait]
    impl PlaceSearch for FixedSearch {
        async fn named_features_around(
            &self,
            _location: &GeoCoordinate,
            _radius_m: f64,
        ) -> Result<Vec<Feature>, BoxError> {
            Ok(self.0.clone())
        }
    }

    struct UnreachableSearch;

    #[async_trait]
    impl PlaceSearch for UnreachableSearch {
        async fn named_features_around(
            &self,
            _location: &GeoCoordinate,
            _radius_m: f64,
        ) -> Result<Vec<Feature>, BoxError> {
            Err("connection refused".into())
        }
    }

    /// Names each location after its latitude, answering later calls faster.
    struct EchoSearch {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl PlaceSearch for EchoSearch {
        async fn named_features_around(
            &self,
            location: &GeoCoordinate,
            _radius_m: f64,
        ) -> Result<Vec<Feature>, BoxError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            for _ in 0..(10 - call.min(10)) {
                tokio::task::yield_now().await;
            }
            let name = format!("{}", location.latitude);
            Ok(vec![Feature::new(
                FeatureKind::Area,
                *location,
                HashMap::from([("name".to_owned(), name)]),
            )])
        }
    }

    #[test]
    fn scores_follow_tags_and_kind() {
        assert_eq!(
            score(&feature(FeatureKind::Area, &[("name", "Hibiya"), ("leisure", "park")])),
            18
        );
        assert_eq!(
            score(&feature(FeatureKind::Point, &[("name", "Cafe"), ("amenity", "cafe")])),
            13
        );
        assert_eq!(
            score(&feature(
                FeatureKind::Area,
                &[("name", "Todai"), ("amenity", "university")]
            )),
            18
        );
        assert_eq!(score(&feature(FeatureKind::Point, &[])), -2);
        // key and value both listed still count once per tag
        assert_eq!(score(&feature(FeatureKind::Area, &[("tourism", "attraction")])), 5);
    }

    #[test]
    fn park_area_beats_untagged_point() {
        let features = vec![
            feature(FeatureKind::Point, &[]),
            feature(FeatureKind::Area, &[("name", "Ueno Park"), ("leisure", "park")]),
        ];
        assert_eq!(best_feature(&features).unwrap().name(), Some("Ueno Park"));
    }

    #[test]
    fn ties_go_to_first_feature() {
        let features = vec![
            feature(FeatureKind::Area, &[("name", "First")]),
            feature(FeatureKind::Area, &[("name", "Second")]),
        ];
        assert_eq!(best_feature(&features).unwrap().name(), Some("First"));
        assert!(best_feature(&[]).is_none());
    }

    #[tokio::test]
    async fn snap_uses_landmark_location_and_name() {
        let mut park = feature(FeatureKind::Area, &[("name", "Hibiya Park"), ("leisure", "park")]);
        park.location = GeoCoordinate::new(35.6736, 139.7559);
        let search = FixedSearch(vec![feature(FeatureKind::Point, &[("name", "Kiosk")]), park]);

        let waypoint = snap(&search, &GeoCoordinate::new(35.674, 139.756), 300.0).await;
        assert_eq!(waypoint.name, "Hibiya Park");
        assert_eq!(waypoint.location(), GeoCoordinate::new(35.6736, 139.7559));
    }

    #[tokio::test]
    async fn unnamed_landmark_is_labelled_with_its_position() {
        let search = FixedSearch(vec![feature(FeatureKind::Area, &[("leisure", "park")])]);
        let waypoint = snap(&search, &GeoCoordinate::new(1.0, 2.0), 300.0).await;
        assert_eq!(waypoint.name, "Point at 35.680000, 139.760000");
    }

    #[tokio::test]
    async fn empty_or_failed_search_falls_back_to_synthetic_waypoint() {
        let location = GeoCoordinate::new(35.681236, 139.767125);
        let expected = Waypoint::synthetic(location);

        assert_eq!(snap(&FixedSearch(vec![]), &location, 300.0).await, expected);
        assert_eq!(snap(&UnreachableSearch, &location, 300.0).await, expected);
    }

    #[tokio::test]
    async fn snap_all_keeps_vertex_order() {
        let locations = (0..6)
            .map(|i| GeoCoordinate::new(i as f64, 0.0))
            .collect::<Vec<_>>();
        let search = EchoSearch {
            calls: AtomicUsize::new(0),
        };

        let waypoints = snap_all(&search, &locations, 300.0, 4).await;
        let names = waypoints
            .iter()
            .map(|waypoint| waypoint.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["0", "1", "2", "3", "4", "5"]);
    }
}
