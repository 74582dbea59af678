use std::error::Error;
use std::fmt;

use model::{location::GeoCoordinate, route::RouteResult, shape::ShapePoint};
use openrouteservice::client::{OrsClient, OrsCredentials};
use overpass::client::{OverpassClient, OverpassSettings};

pub mod assemble;
pub mod config;
pub mod decompose;
pub mod engine;
pub mod projection;
pub mod realize;
pub mod ring;
pub mod scale;
pub mod snapping;

pub use config::EngineConfig;
pub use engine::RouteEngine;

pub type BoxError = Box<dyn Error + Send + Sync>;

#[derive(Debug)]
pub enum EngineError {
    /// Fewer than two vertices or an outline without length.
    DegenerateShape,
    /// The requested distance is not a positive, finite number.
    InvalidDistance(f64),
    /// The configured detour factor is not a positive, finite number.
    InvalidDetourFactor(f64),
    /// A service client could not be constructed.
    Setup(BoxError),
    /// The walking-directions service did not return a route.
    Routing(BoxError),
}

impl Error for EngineError {}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EngineError::DegenerateShape => write!(
                f,
                "Shape needs at least two distinct points to form an outline."
            ),
            EngineError::InvalidDistance(distance) => {
                write!(f, "Invalid target distance: {} km", distance)
            }
            EngineError::InvalidDetourFactor(factor) => {
                write!(f, "Invalid detour factor: {}", factor)
            }
            EngineError::Setup(e) => write!(f, "Could not set up service client: {}", e),
            EngineError::Routing(e) => write!(f, "Route generation failed: {}", e),
        }
    }
}

impl From<overpass::ApiError> for EngineError {
    fn from(e: overpass::ApiError) -> Self {
        EngineError::Setup(Box::new(e))
    }
}

impl From<openrouteservice::ApiError> for EngineError {
    fn from(e: openrouteservice::ApiError) -> Self {
        EngineError::Setup(Box::new(e))
    }
}

/// Generates a walking route in the form of `outline` that starts and ends at
/// (`anchor_lat`, `anchor_lon`) and is roughly `target_distance_km` long,
/// using the public Overpass instance and OpenRouteService.
pub async fn generate_route(
    anchor_lat: f64,
    anchor_lon: f64,
    outline: &[ShapePoint],
    target_distance_km: f64,
    routing_api_key: &str,
) -> Result<RouteResult, EngineError> {
    let engine = RouteEngine::new(
        OverpassClient::new(&OverpassSettings::default())?,
        OrsClient::new(&OrsCredentials::new(routing_api_key))?,
        EngineConfig::default(),
    );
    engine
        .generate(
            GeoCoordinate::new(anchor_lat, anchor_lon),
            outline,
            target_distance_km,
        )
        .await
}
