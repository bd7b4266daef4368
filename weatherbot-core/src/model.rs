use serde::{Deserialize, Serialize};

/// One geocoding match.
///
/// Candidates are kept in the order the geocoding endpoint returned them;
/// the 1-based position in that order is what the user picks during
/// disambiguation, so the list is never re-sorted or deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationCandidate {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: String,
}

/// Current conditions for one location at the time of the lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location_name: String,
    pub condition: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
}
