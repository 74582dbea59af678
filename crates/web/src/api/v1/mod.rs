use axum::{routing::on, Router};

use crate::{
    common::{route_not_found, METHOD_FILTER_ALL},
    WebState,
};

mod routes;

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .nest_service("/routes", routes::routes(state.clone()))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}
