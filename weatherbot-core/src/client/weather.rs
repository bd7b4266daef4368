use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{error::TransportError, model::WeatherSnapshot};

use super::{WeatherClient, http_client, truncate_body};

/// OpenWeather current-conditions client.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        Self { api_key, http: http_client() }
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
}

impl From<OwCurrentResponse> for WeatherSnapshot {
    fn from(parsed: OwCurrentResponse) -> Self {
        let condition = parsed
            .weather
            .first()
            .map(|w| w.description.clone())
            .unwrap_or_else(|| "Unknown".to_string());

        WeatherSnapshot {
            location_name: parsed.name,
            condition,
            temperature_c: parsed.main.temp,
            feels_like_c: parsed.main.feels_like,
            humidity_pct: parsed.main.humidity,
        }
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherClient {
    async fn fetch_snapshot(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<WeatherSnapshot, TransportError> {
        let url = "https://api.openweathermap.org/data/2.5/weather";
        let lat = lat.to_string();
        let lon = lon.to_string();

        let res = self
            .http
            .get(url)
            .query(&[
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|source| TransportError::Request { service: "weather", source })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| TransportError::Request { service: "weather", source })?;

        if !status.is_success() {
            return Err(TransportError::Status {
                service: "weather",
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body)
            .map_err(|source| TransportError::Payload { service: "weather", source })?;

        debug!("current conditions for ({lat}, {lon}): {:?}", parsed.weather.first());

        Ok(WeatherSnapshot::from(parsed))
    }
}
