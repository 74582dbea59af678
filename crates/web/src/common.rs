use axum::{
    extract::{OriginalUri, Query, Request},
    http::{Method, StatusCode},
    response::IntoResponse,
    routing::MethodFilter,
    Json,
};
use model::ExampleData;
use route_engine::EngineError;
use schemars::{schema_for, schema_for_value, JsonSchema};
use serde::{Deserialize, Serialize};

pub type HandlerResult<O> = Result<Json<O>, RouteErrorResponse>;

/// A `MethodFilter` that matches all http methods.
pub(crate) const METHOD_FILTER_ALL: MethodFilter = MethodFilter::GET
    .or(MethodFilter::POST)
    .or(MethodFilter::PATCH)
    .or(MethodFilter::PUT)
    .or(MethodFilter::DELETE);

// - Services returning commonly used responses -

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SchemaParams {
    #[serde(default = "Default::default")]
    example_data: bool,
}

pub(crate) async fn schema<T: ExampleData + JsonSchema + Serialize>(
    Query(params): Query<SchemaParams>,
) -> impl IntoResponse {
    if params.example_data {
        Json(schema_for_value!(T::example_data()))
    } else {
        Json(schema_for!(T))
    }
}

pub(crate) async fn route_not_found(
    OriginalUri(original_uri): OriginalUri,
    req: Request,
) -> impl IntoResponse {
    RouteErrorResponse::not_found(req.method(), original_uri.path())
}

// - Commonly used responeses -

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteErrorResponse {
    #[serde(skip)]
    pub status_code: StatusCode,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_method: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_uri: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_information: Option<String>,
}

impl RouteErrorResponse {
    pub fn new(status_code: StatusCode) -> Self {
        Self {
            status_code,
            http_method: None,
            requested_uri: None,
            message: None,
            detailed_information: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST).with_message(message)
    }

    pub fn not_found(method: &Method, uri: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND)
            .with_method(method)
            .with_uri(uri)
            .with_default_message()
    }

    pub fn with_method(mut self, method: &Method) -> Self {
        self.http_method = Some(method.to_string());
        self
    }

    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.requested_uri = Some(uri.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_default_message(self) -> Self {
        let message = self
            .status_code
            .canonical_reason()
            .unwrap_or("i dunno what happened here :/");
        self.with_message(message)
    }

    pub fn with_detailed_information(mut self, message: impl Into<String>) -> Self {
        self.detailed_information = Some(message.into());
        self
    }
}

impl From<EngineError> for RouteErrorResponse {
    fn from(value: EngineError) -> Self {
        match value {
            EngineError::DegenerateShape | EngineError::InvalidDistance(_) => {
                Self::bad_request(value.to_string())
            }
            EngineError::Routing(why) => Self::new(StatusCode::BAD_GATEWAY)
                .with_message("The routing service could not realize the route.")
                .with_detailed_information(why.to_string()),
            EngineError::InvalidDetourFactor(_) => Self::new(StatusCode::INTERNAL_SERVER_ERROR)
                .with_default_message()
                .with_detailed_information(value.to_string()),
            EngineError::Setup(why) => Self::new(StatusCode::INTERNAL_SERVER_ERROR)
                .with_default_message()
                .with_detailed_information(why.to_string()),
        }
    }
}

impl IntoResponse for RouteErrorResponse {
    fn into_response(self) -> axum::response::Response {
        (self.status_code, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_errors_map_to_status_codes() {
        assert_eq!(
            RouteErrorResponse::from(EngineError::DegenerateShape).status_code,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RouteErrorResponse::from(EngineError::InvalidDistance(-1.0)).status_code,
            StatusCode::BAD_REQUEST
        );

        assert_eq!(
            RouteErrorResponse::from(EngineError::InvalidDetourFactor(0.0)).status_code,
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let routing = RouteErrorResponse::from(EngineError::Routing("timed out".into()));
        assert_eq!(routing.status_code, StatusCode::BAD_GATEWAY);
        assert_eq!(routing.detailed_information.as_deref(), Some("timed out"));
    }

    #[test]
    fn status_code_is_not_serialized() {
        let json = serde_json::to_value(RouteErrorResponse::bad_request("nope")).unwrap();
        assert_eq!(json, serde_json::json!({"message": "nope"}));
    }
}
