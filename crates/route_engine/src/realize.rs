use async_trait::async_trait;
use model::waypoint::Waypoint;
use openrouteservice::{
    client::{OrsClient, Profile},
    directions::Directions,
};

use crate::BoxError;

/// A service that turns an ordered list of via-points into a walkable path.
#[async_trait]
pub trait WalkingDirections: Send + Sync {
    async fn walk(&self, waypoints: &[Waypoint]) -> Result<Directions, BoxError>;
}

#[async_trait]
impl<T: WalkingDirections + ?Sized> WalkingDirections for Box<T> {
    async fn walk(&self, waypoints: &[Waypoint]) -> Result<Directions, BoxError> {
        (**self).walk(waypoints).await
    }
}

#[async_trait]
impl WalkingDirections for OrsClient {
    async fn walk(&self, waypoints: &[Waypoint]) -> Result<Directions, BoxError> {
        self.directions(Profile::FootWalking, waypoints)
            .await
            .map_err(|why| Box::new(why) as BoxError)
    }
}
