//! Fixed-template rendering of outbound text.

use std::fmt::Write;

use crate::model::{LocationCandidate, WeatherSnapshot};

/// Render the weather report sentence.
///
/// Pure: the same snapshot always renders the same string.
pub fn weather_report(snapshot: &WeatherSnapshot) -> String {
    format!(
        "In {} it is currently {}, the temperature is {}°C, feels like {}°C, humidity is {}%.",
        snapshot.location_name,
        snapshot.condition,
        snapshot.temperature_c,
        snapshot.feels_like_c,
        snapshot.humidity_pct,
    )
}

/// Render the numbered disambiguation listing, one candidate per line:
/// position, name, country and coordinates.
pub fn candidate_listing(candidates: &[LocationCandidate]) -> String {
    let mut listing = String::new();
    for (position, candidate) in candidates.iter().enumerate() {
        let _ = writeln!(
            listing,
            "{}: {} from {} at ({}, {})",
            position + 1,
            candidate.name,
            candidate.country,
            candidate.latitude,
            candidate.longitude,
        );
    }
    listing.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fakes::{candidate, snapshot};

    #[test]
    fn report_embeds_every_snapshot_field() {
        let report = weather_report(&WeatherSnapshot {
            location_name: "London".to_string(),
            condition: "light rain".to_string(),
            temperature_c: 11.3,
            feels_like_c: 10.6,
            humidity_pct: 81,
        });

        assert!(report.contains("London"));
        assert!(report.contains("light rain"));
        assert!(report.contains("11.3°C"));
        assert!(report.contains("10.6°C"));
        assert!(report.contains("81%"));
    }

    #[test]
    fn formatting_is_idempotent() {
        let snap = snapshot("Reykjavik");
        assert_eq!(weather_report(&snap), weather_report(&snap));
    }

    #[test]
    fn listing_is_numbered_from_one_in_input_order() {
        let listing = candidate_listing(&[
            candidate("Springfield", 39.79, -89.64, "US"),
            candidate("Springfield", -26.18, 28.1, "ZA"),
        ]);

        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "1: Springfield from US at (39.79, -89.64)");
        assert_eq!(lines[1], "2: Springfield from ZA at (-26.18, 28.1)");
    }

    #[test]
    fn listing_has_no_trailing_newline() {
        let listing = candidate_listing(&[candidate("Oslo", 59.9, 10.7, "NO")]);
        assert!(!listing.ends_with('\n'));
    }
}
