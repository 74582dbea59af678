use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::location::GeoCoordinate;

/// A named via-point of a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Waypoint {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl Waypoint {
    pub fn new<S: Into<String>>(name: S, location: GeoCoordinate) -> Self {
        Self {
            name: name.into(),
            lat: location.latitude,
            lng: location.longitude,
        }
    }

    /// Waypoint labelled only by its coordinates, used when no landmark is known.
    pub fn synthetic(location: GeoCoordinate) -> Self {
        Self::new(
            format!(
                "Waypoint at {:.6}, {:.6}",
                location.latitude, location.longitude
            ),
            location,
        )
    }

    pub fn location(&self) -> GeoCoordinate {
        GeoCoordinate::new(self.lat, self.lng)
    }

    /// Compares coordinates only; names are ignored.
    pub fn same_location_as(&self, other: &Waypoint) -> bool {
        self.lat == other.lat && self.lng == other.lng
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthetic_waypoint_is_labelled_with_six_decimals() {
        let waypoint = Waypoint::synthetic(GeoCoordinate::new(35.681236, 139.7671254));
        assert_eq!(waypoint.name, "Waypoint at 35.681236, 139.767125");
        assert_eq!(waypoint.lat, 35.681236);
        assert_eq!(waypoint.lng, 139.7671254);
    }

    #[test]
    fn same_location_ignores_names() {
        let a = Waypoint::new("Tokyo Station", GeoCoordinate::new(1.0, 2.0));
        let b = Waypoint::synthetic(GeoCoordinate::new(1.0, 2.0));
        assert!(a.same_location_as(&b));
        assert!(!a.same_location_as(&Waypoint::synthetic(GeoCoordinate::new(1.0, 2.5))));
    }
}
