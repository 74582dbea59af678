use model::{route::RouteResult, waypoint::Waypoint};
use openrouteservice::directions::Directions;

pub fn assemble(waypoints: Vec<Waypoint>, directions: Directions) -> RouteResult {
    RouteResult {
        waypoints,
        total_distance: directions.distance_km,
        route: directions.geojson,
    }
}
