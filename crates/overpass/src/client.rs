use std::{env, time::Duration};

use model::{feature::Feature, location::GeoCoordinate};
use serde::{Deserialize, Serialize};

use crate::{response::OverpassResponse, ApiError};

pub const OVERPASS_API_URL: &str = "https://overpass-api.de/api/interpreter";

const DEFAULT_TIMEOUT_SECS: u64 = 25;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverpassSettings {
    pub url: String,
    pub timeout_secs: u64,
    pub proxy: Option<String>,
}

impl Default for OverpassSettings {
    fn default() -> Self {
        Self {
            url: OVERPASS_API_URL.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            proxy: None,
        }
    }
}

impl OverpassSettings {
    /// Reads `OVERPASS_URL`, `OVERPASS_TIMEOUT_SECS` and `HTTP_PROXY_URL`,
    /// falling back to the public instance.
    pub fn env() -> Self {
        let defaults = Self::default();
        Self {
            url: env::var("OVERPASS_URL").unwrap_or(defaults.url),
            timeout_secs: env::var("OVERPASS_TIMEOUT_SECS")
                .ok()
                .and_then(|secs| secs.parse().ok())
                .unwrap_or(defaults.timeout_secs),
            proxy: env::var("HTTP_PROXY_URL").ok(),
        }
    }
}

/// Overpass QL selecting every named node, way and relation within
/// `radius_m` meters, with ways and relations reduced to their center.
pub fn named_features_query(location: &GeoCoordinate, radius_m: f64) -> String {
    let around = format!(
        "around:{},{},{}",
        radius_m, location.latitude, location.longitude
    );
    format!(
        "[out:json];(node({around})[\"name\"];way({around})[\"name\"];relation({around})[\"name\"];);out center;"
    )
}

pub struct OverpassClient {
    pub settings: OverpassSettings,
    http: reqwest::Client,
}

impl OverpassClient {
    pub fn new(settings: &OverpassSettings) -> Result<Self, ApiError> {
        /* build a http client with timeout and optional proxy */
        let mut builder =
            reqwest::Client::builder().timeout(Duration::from_secs(settings.timeout_secs));
        if let Some(proxy_url) = &settings.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }

        Ok(Self {
            settings: settings.clone(),
            http: builder.build()?,
        })
    }

    /// Fetch all named features around a location.
    pub async fn named_features_around(
        &self,
        location: &GeoCoordinate,
        radius_m: f64,
    ) -> Result<Vec<Feature>, ApiError> {
        let query = named_features_query(location, radius_m);
        log::debug!(
            "Requesting named features within {radius_m}m of {}, {}.",
            location.latitude,
            location.longitude
        );

        /* perform get-request */
        let response = self
            .http
            .get(&self.settings.url)
            .query(&[("data", query)])
            .send()
            .await?;

        /* parse response */
        match response.status() {
            reqwest::StatusCode::OK => {
                let body: OverpassResponse = serde_json::from_str(&response.text().await?)?;
                Ok(body.into_features())
            }
            other => Err(ApiError::InvalidResponse {
                status_code: other,
                url: self.settings.url.clone(),
                response: response.text().await.ok(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_selects_named_elements_around_location() {
        let query = named_features_query(&GeoCoordinate::new(35.5, 139.25), 300.0);
        assert!(query.starts_with("[out:json];"));
        assert!(query.contains("node(around:300,35.5,139.25)[\"name\"];"));
        assert!(query.contains("way(around:300,35.5,139.25)[\"name\"];"));
        assert!(query.contains("relation(around:300,35.5,139.25)[\"name\"];"));
        assert!(query.ends_with("out center;"));
    }

    #[test]
    fn settings_default_to_public_instance() {
        let settings = OverpassSettings::default();
        assert_eq!(settings.url, OVERPASS_API_URL);
        assert!(settings.proxy.is_none());
    }
}
