use axum::{
    extract::{OriginalUri, State},
    http::Method,
    routing::{get, on, post},
    Json, Router,
};
use model::route::{RouteRequest, RouteResult};
use route_engine::projection::Projection;

use crate::{
    common::{
        route_not_found, schema, HandlerResult, RouteErrorResponse, METHOD_FILTER_ALL,
    },
    WebState,
};

/// Each vertex costs one landmark search, so outlines are capped.
const MAX_SHAPE_POINTS: usize = 256;

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/", post(generate))
        .route("/preview", post(preview))
        .route("/schema", get(schema::<RouteRequest>))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

/// Rejects requests the engine cannot turn into a route.
pub(crate) fn validate(request: &RouteRequest) -> Result<(), RouteErrorResponse> {
    if !(-90.0..=90.0).contains(&request.latitude) {
        return Err(RouteErrorResponse::bad_request(
            "latitude must be between -90 and 90.",
        ));
    }
    if !(-180.0..=180.0).contains(&request.longitude) {
        return Err(RouteErrorResponse::bad_request(
            "longitude must be between -180 and 180.",
        ));
    }
    if !(request.distance_km.is_finite() && request.distance_km > 0.0) {
        return Err(RouteErrorResponse::bad_request(
            "distanceKm must be a positive number.",
        ));
    }
    if request.shape.len() < 2 || request.shape.len() > MAX_SHAPE_POINTS {
        return Err(RouteErrorResponse::bad_request(format!(
            "shape must have between 2 and {} points.",
            MAX_SHAPE_POINTS
        )));
    }
    let first = request.shape[0];
    if request.shape.iter().all(|point| *point == first) {
        return Err(RouteErrorResponse::bad_request(
            "shape must contain at least two distinct points.",
        ));
    }
    Ok(())
}

async fn generate(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { engine }): State<WebState>,
    Json(request): Json<RouteRequest>,
) -> HandlerResult<RouteResult> {
    validate(&request).map_err(|why| {
        why.with_method(&Method::POST)
            .with_uri(original_uri.path())
    })?;

    engine
        .generate(request.anchor(), &request.shape, request.distance_km)
        .await
        .map(Json)
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::POST)
                .with_uri(original_uri.path())
        })
}

async fn preview(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { engine }): State<WebState>,
    Json(request): Json<RouteRequest>,
) -> HandlerResult<Projection> {
    validate(&request).map_err(|why| {
        why.with_method(&Method::POST)
            .with_uri(original_uri.path())
    })?;

    engine
        .preview(request.anchor(), &request.shape, request.distance_km)
        .map(Json)
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::POST)
                .with_uri(original_uri.path())
        })
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use model::{shape::ShapePoint, ExampleData};

    use super::*;

    fn rejected(request: RouteRequest) -> bool {
        validate(&request).is_err_and(|why| why.status_code == StatusCode::BAD_REQUEST)
    }

    #[test]
    fn example_request_is_valid() {
        assert!(validate(&RouteRequest::example_data()).is_ok());
    }

    #[test]
    fn request_parses_from_camel_case_json() {
        let request: RouteRequest = serde_json::from_str(
            r#"{"latitude": 35.681236, "longitude": 139.767125,
                "shape": [[2, 624], [889, 27], [1559, 193]], "distanceKm": 5}"#,
        )
        .unwrap();
        assert_eq!(request.shape.len(), 3);
        assert_eq!(request.distance_km, 5.0);
        assert!(validate(&request).is_ok());
    }

    #[test]
    fn out_of_range_anchor_is_rejected() {
        let mut request = RouteRequest::example_data();
        request.latitude = 91.0;
        assert!(rejected(request));

        let mut request = RouteRequest::example_data();
        request.longitude = f64::NAN;
        assert!(rejected(request));
    }

    #[test]
    fn non_positive_distance_is_rejected() {
        let mut request = RouteRequest::example_data();
        request.distance_km = 0.0;
        assert!(rejected(request));

        let mut request = RouteRequest::example_data();
        request.distance_km = f64::INFINITY;
        assert!(rejected(request));
    }

    #[test]
    fn degenerate_shapes_are_rejected() {
        let mut request = RouteRequest::example_data();
        request.shape.truncate(1);
        assert!(rejected(request));

        let mut request = RouteRequest::example_data();
        request.shape = vec![ShapePoint::new(3.0, 3.0); 4];
        assert!(rejected(request));

        let mut request = RouteRequest::example_data();
        request.shape = vec![ShapePoint::new(0.0, 0.0); MAX_SHAPE_POINTS + 1];
        assert!(rejected(request));
    }
}
