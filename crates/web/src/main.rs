use std::env;

use openrouteservice::client::{OrsClient, OrsCredentials};
use overpass::client::{OverpassClient, OverpassSettings};
use route_engine::EngineConfig;
use tracing_subscriber::EnvFilter;
use web::{start_web_server, WebState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // services
    let credentials = OrsCredentials::env().expect("expected ORS_API_KEY in env.");
    let directions =
        OrsClient::new(&credentials).expect("could not build routing client.");
    let search = OverpassClient::new(&OverpassSettings::env())
        .expect("could not build place search client.");

    // engine
    let config = EngineConfig::from_env();
    log::info!("engine config: {:?}", config);
    let state = WebState::new(search, directions, config);

    // web server
    let address = env::var("BIND_ADDRESS").unwrap_or("0.0.0.0:8080".to_owned());
    let web_future = start_web_server(state, &address);

    if let Err(why) = web_future.await {
        log::error!("web server stopped: {}", why);
    }
}
