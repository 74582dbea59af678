pub use crate::common::HandlerResult;

use std::sync::Arc;

use axum::{extract::FromRef, Router};
use route_engine::{
    realize::WalkingDirections, snapping::PlaceSearch, EngineConfig, RouteEngine,
};
use tokio::net::TcpListener;

pub mod api;
pub mod common;

pub type Engine = RouteEngine<Box<dyn PlaceSearch>, Box<dyn WalkingDirections>>;

#[derive(Clone, FromRef)]
pub struct WebState {
    pub engine: Arc<Engine>,
}

impl WebState {
    pub fn new(
        search: impl PlaceSearch + 'static,
        directions: impl WalkingDirections + 'static,
        config: EngineConfig,
    ) -> Self {
        let search: Box<dyn PlaceSearch> = Box::new(search);
        let directions: Box<dyn WalkingDirections> = Box::new(directions);
        Self {
            engine: Arc::new(RouteEngine::new(search, directions, config)),
        }
    }
}

pub fn router(state: WebState) -> Router {
    Router::new().nest_service("/api", api::routes(state))
}

pub async fn start_web_server(state: WebState, address: &str) -> std::io::Result<()> {
    let listener = TcpListener::bind(address).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state).into_make_service()).await?;

    Ok(())
}
