//! Place-name resolution: geocode the name, then either fetch weather
//! straight away or hand the candidate set back for disambiguation.

use tracing::debug;

use crate::client::{GeocodingClient, WeatherClient};
use crate::error::TransportError;
use crate::model::{LocationCandidate, WeatherSnapshot};

/// Outcome of one top-level resolution attempt.
#[derive(Debug)]
pub enum ResolutionOutcome {
    /// The top geocoding match equalled the query; weather was fetched for
    /// it without asking the user.
    Direct(WeatherSnapshot),
    /// The name needs disambiguation; all matches, in source order.
    Ambiguous(Vec<LocationCandidate>),
    /// The geocoding endpoint knows no such place.
    NotFound,
    /// One of the two lookups failed at the transport level.
    LookupFailed(TransportError),
}

/// Resolve a place name into weather or a candidate set.
///
/// Exact-match detection compares only the FIRST candidate, case
/// insensitively, against the raw query; on a match disambiguation is
/// skipped even when more candidates exist. The upstream ranking is
/// authoritative: the list is never re-sorted or deduplicated, and no
/// lookup is retried.
pub async fn resolve(
    geocoder: &dyn GeocodingClient,
    weather: &dyn WeatherClient,
    place_name: &str,
) -> ResolutionOutcome {
    let candidates = match geocoder.resolve_names(place_name).await {
        Ok(candidates) => candidates,
        Err(err) => return ResolutionOutcome::LookupFailed(err),
    };

    let Some(first) = candidates.first() else {
        return ResolutionOutcome::NotFound;
    };

    if first.name.to_lowercase() == place_name.to_lowercase() {
        debug!("top match {:?} equals the query, skipping disambiguation", first.name);
        return match weather.fetch_snapshot(first.latitude, first.longitude).await {
            Ok(snapshot) => ResolutionOutcome::Direct(snapshot),
            Err(err) => ResolutionOutcome::LookupFailed(err),
        };
    }

    debug!("{} candidate(s) for {place_name:?}, asking the user", candidates.len());
    ResolutionOutcome::Ambiguous(candidates)
}
