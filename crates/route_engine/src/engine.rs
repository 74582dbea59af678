use model::{location::GeoCoordinate, route::RouteResult, shape::ShapePoint};

use crate::{
    assemble::assemble,
    config::EngineConfig,
    decompose::decompose,
    projection::{project, Projection},
    realize::WalkingDirections,
    ring,
    scale::scale_factor,
    snapping::{snap_all, PlaceSearch},
    EngineError,
};

/// Turns shape outlines into walking routes. Holds no per-request state, so
/// one engine can serve any number of concurrent requests.
pub struct RouteEngine<S, W>
where
    S: PlaceSearch,
    W: WalkingDirections,
{
    search: S,
    directions: W,
    pub config: EngineConfig,
}

impl<S, W> RouteEngine<S, W>
where
    S: PlaceSearch,
    W: WalkingDirections,
{
    pub fn new(search: S, directions: W, config: EngineConfig) -> Self {
        Self {
            search,
            directions,
            config,
        }
    }

    /// Lays the outline out around `anchor` without contacting any service.
    pub fn preview(
        &self,
        anchor: GeoCoordinate,
        outline: &[ShapePoint],
        target_distance_km: f64,
    ) -> Result<Projection, EngineError> {
        if !(target_distance_km.is_finite() && target_distance_km > 0.0) {
            return Err(EngineError::InvalidDistance(target_distance_km));
        }
        let detour_factor = self.config.detour_factor;
        if !(detour_factor.is_finite() && detour_factor > 0.0) {
            return Err(EngineError::InvalidDetourFactor(detour_factor));
        }
        if outline.len() < 2 {
            return Err(EngineError::DegenerateShape);
        }

        let edges = decompose(outline);
        let h = scale_factor(&edges, target_distance_km, detour_factor)
            .ok_or(EngineError::DegenerateShape)?;

        Ok(project(anchor, &edges, h))
    }

    /// Generates a closed walking route in the form of `outline`, starting and
    /// ending at `anchor`.
    pub async fn generate(
        &self,
        anchor: GeoCoordinate,
        outline: &[ShapePoint],
        target_distance_km: f64,
    ) -> Result<RouteResult, EngineError> {
        let projection = self.preview(anchor, outline, target_distance_km)?;
        log::info!(
            "Generating {} km route with {} vertices around {}, {}.",
            target_distance_km,
            projection.coordinates.len(),
            anchor.latitude,
            anchor.longitude
        );

        let mut waypoints = snap_all(
            &self.search,
            &projection.coordinates,
            self.config.snap_radius_m,
            self.config.snap_concurrency,
        )
        .await;

        ring::close(&mut waypoints);
        let directions = self
            .directions
            .walk(&waypoints)
            .await
            .map_err(EngineError::Routing)?;
        ring::open(&mut waypoints);

        log::info!(
            "Route realized: {:.2} km walked, {:.2} km straight-line, {:.2} km requested.",
            directions.distance_km,
            projection.perimeter_km,
            target_distance_km
        );

        Ok(assemble(waypoints, directions))
    }
}
