use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{error::TransportError, model::LocationCandidate};

use super::{GeocodingClient, http_client, truncate_body};

/// Result cap requested from the geocoding endpoint.
const RESULT_LIMIT: u32 = 100;

/// OpenWeather direct-geocoding client.
#[derive(Debug, Clone)]
pub struct OpenWeatherGeocoder {
    api_key: String,
    http: Client,
}

impl OpenWeatherGeocoder {
    pub fn new(api_key: String) -> Self {
        Self { api_key, http: http_client() }
    }
}

#[derive(Debug, Deserialize)]
struct GeoEntry {
    name: String,
    lat: f64,
    lon: f64,
    country: String,
}

impl From<GeoEntry> for LocationCandidate {
    fn from(entry: GeoEntry) -> Self {
        LocationCandidate {
            name: entry.name,
            latitude: entry.lat,
            longitude: entry.lon,
            country: entry.country,
        }
    }
}

#[async_trait]
impl GeocodingClient for OpenWeatherGeocoder {
    async fn resolve_names(
        &self,
        query: &str,
    ) -> Result<Vec<LocationCandidate>, TransportError> {
        let url = "http://api.openweathermap.org/geo/1.0/direct";
        let limit = RESULT_LIMIT.to_string();

        let res = self
            .http
            .get(url)
            .query(&[
                ("q", query),
                ("limit", limit.as_str()),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|source| TransportError::Request { service: "geocoding", source })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| TransportError::Request { service: "geocoding", source })?;

        if !status.is_success() {
            return Err(TransportError::Status {
                service: "geocoding",
                status,
                body: truncate_body(&body),
            });
        }

        let entries: Vec<GeoEntry> = serde_json::from_str(&body)
            .map_err(|source| TransportError::Payload { service: "geocoding", source })?;

        debug!("geocoding returned {} match(es) for {query:?}", entries.len());

        Ok(entries.into_iter().map(LocationCandidate::from).collect())
    }
}
