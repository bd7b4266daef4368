use crate::{
    Config,
    error::TransportError,
    model::{LocationCandidate, WeatherSnapshot},
};
use async_trait::async_trait;
use std::{fmt::Debug, time::Duration};

pub mod geocoding;
pub mod weather;

/// Bounded timeout for both endpoints. The dialogue has no cancellation
/// path for a hung external call, so requests must not block forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolves a free-text place name into an ordered list of matches.
#[async_trait]
pub trait GeocodingClient: Send + Sync + Debug {
    /// Returns all matches for `query` in the order the geocoding source
    /// ranked them; an empty list means the name matched nothing. A
    /// transport-level failure is returned, never swallowed.
    async fn resolve_names(
        &self,
        query: &str,
    ) -> Result<Vec<LocationCandidate>, TransportError>;
}

/// Resolves a coordinate pair into a current-conditions snapshot.
#[async_trait]
pub trait WeatherClient: Send + Sync + Debug {
    /// Fetch current conditions for the coordinates, metric units. The
    /// coordinates come from a `LocationCandidate`, so no validation is
    /// performed here.
    async fn fetch_snapshot(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<WeatherSnapshot, TransportError>;
}

/// Construct both OpenWeather-backed clients from config.
pub fn clients_from_config(
    config: &Config,
) -> anyhow::Result<(Box<dyn GeocodingClient>, Box<dyn WeatherClient>)> {
    let api_key = config.require_api_key()?;

    Ok((
        Box::new(geocoding::OpenWeatherGeocoder::new(api_key.to_owned())),
        Box::new(weather::OpenWeatherClient::new(api_key.to_owned())),
    ))
}

/// Shared HTTP client with the bounded request timeout applied.
pub(crate) fn http_client() -> reqwest::Client {
    // The builder only fails on an unusable TLS backend; fall back to the
    // default client rather than propagate from a constructor.
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_default()
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn clients_from_config_errors_when_missing_api_key() {
        let cfg = Config::default();
        let err = clients_from_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("No OpenWeather API key configured"));
    }

    #[test]
    fn clients_from_config_works_when_key_is_set() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());

        assert!(clients_from_config(&cfg).is_ok());
    }

    #[test]
    fn truncate_body_caps_long_payloads() {
        let long = "x".repeat(500);
        let truncated = truncate_body(&long);

        assert!(truncated.ends_with("..."));
        assert!(truncated.len() < long.len());
        assert_eq!(truncate_body("short"), "short");
    }
}
