use thiserror::Error;

/// Failure talking to one of the external endpoints.
///
/// Carried as a value through the pipeline so the caller can log the cause
/// while the user only sees a generic retry message.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request never produced a usable response (connect, timeout,
    /// body read).
    #[error("Failed to send request to the {service} endpoint: {source}")]
    Request {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success status.
    #[error("{service} request failed with status {status}: {body}")]
    Status {
        service: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    /// The endpoint answered 2xx but the payload did not parse.
    #[error("Failed to parse {service} response JSON: {source}")]
    Payload {
        service: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl TransportError {
    /// Which endpoint failed ("geocoding" or "weather").
    pub fn service(&self) -> &'static str {
        match self {
            TransportError::Request { service, .. }
            | TransportError::Status { service, .. }
            | TransportError::Payload { service, .. } => service,
        }
    }
}

/// Pre-flight rejection of a `/weather` argument.
///
/// Place names may contain only letters, digits, whitespace and hyphens
/// (plus underscore, which the word class includes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("place name may contain only letters, digits, whitespace and hyphens")]
pub struct InvalidPlaceName;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_mentions_service_and_status() {
        let err = TransportError::Status {
            service: "geocoding",
            status: reqwest::StatusCode::UNAUTHORIZED,
            body: "{\"cod\":401}".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("geocoding"));
        assert!(msg.contains("401"));
        assert_eq!(err.service(), "geocoding");
    }

    #[test]
    fn payload_error_mentions_service() {
        let source = serde_json::from_str::<Vec<i32>>("not json").unwrap_err();
        let err = TransportError::Payload { service: "weather", source };

        assert!(err.to_string().contains("weather"));
        assert_eq!(err.service(), "weather");
    }
}
