use std::{env, time::Duration};

use model::waypoint::Waypoint;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    directions::{Directions, DirectionsRequest},
    ApiError,
};

pub const ORS_API_URL: &str = "https://api.openrouteservice.org";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrsCredentials {
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
    pub proxy: Option<String>,
}

impl OrsCredentials {
    pub fn new<S: Into<String>>(api_key: S) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: ORS_API_URL.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            proxy: None,
        }
    }

    /// Reads `ORS_API_KEY` (required) and the optional `ORS_BASE_URL`,
    /// `ORS_TIMEOUT_SECS` and `HTTP_PROXY_URL`.
    pub fn env() -> Option<Self> {
        let mut credentials = Self::new(env::var("ORS_API_KEY").ok()?);
        if let Ok(base_url) = env::var("ORS_BASE_URL") {
            credentials.base_url = base_url;
        }
        if let Some(timeout_secs) = env::var("ORS_TIMEOUT_SECS")
            .ok()
            .and_then(|secs| secs.parse().ok())
        {
            credentials.timeout_secs = timeout_secs;
        }
        credentials.proxy = env::var("HTTP_PROXY_URL").ok();
        Some(credentials)
    }
}

pub enum Profile {
    FootWalking,
}

impl Profile {
    pub fn text(&self) -> &'static str {
        match self {
            Self::FootWalking => "foot-walking",
        }
    }
}

pub struct OrsClient {
    pub credentials: OrsCredentials,
    http: reqwest::Client,
}

impl OrsClient {
    pub fn new(credentials: &OrsCredentials) -> Result<Self, ApiError> {
        /* build a http client with timeout and optional proxy */
        let mut builder = reqwest::Client::builder()
            .timeout(Duration::from_secs(credentials.timeout_secs));
        if let Some(proxy_url) = &credentials.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }

        Ok(Self {
            credentials: credentials.clone(),
            http: builder.build()?,
        })
    }

    /// Route through all waypoints in the given order.
    pub async fn directions(
        &self,
        profile: Profile,
        waypoints: &[Waypoint],
    ) -> Result<Directions, ApiError> {
        let url = format!(
            "{}/v2/directions/{}/geojson",
            self.credentials.base_url.trim_end_matches('/'),
            profile.text()
        );
        log::info!(
            "Requesting {} directions through {} waypoints.",
            profile.text(),
            waypoints.len()
        );

        /* perform post-request */
        let response = self
            .http
            .post(&url)
            .header("Authorization", &self.credentials.api_key)
            .json(&DirectionsRequest::from_waypoints(waypoints))
            .send()
            .await?;

        /* parse response */
        match response.status() {
            reqwest::StatusCode::OK => {
                let geojson: Value = serde_json::from_str(&response.text().await?)?;
                Directions::from_geojson(geojson)
            }
            other => {
                let error = ApiError::InvalidResponse {
                    status_code: other,
                    url,
                    response: response.text().await.ok(),
                };
                log::error!("{error}");
                Err(error)
            }
        }
    }
}
