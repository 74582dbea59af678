use std::env;

use model::{route::RouteRequest, ExampleData};
use route_engine::generate_route;

#[tokio::main]
async fn main() {
    env_logger::init();

    // hexagon around Tokyo Station, 10 km
    let request = RouteRequest::example_data();
    let api_key = env::var("ORS_API_KEY").expect("Expected ORS_API_KEY.");

    let result = generate_route(
        request.latitude,
        request.longitude,
        &request.shape,
        request.distance_km,
        &api_key,
    )
    .await;

    match result {
        Ok(route) => {
            let json = serde_json::to_string_pretty(&route).unwrap();
            println!("json: {}", json);
        }
        Err(why) => log::error!("{}", why),
    }
}
