//! Inbound-message handling: ties the pipeline, the dialogue store and the
//! report templates together.
//!
//! One call per inbound message; each call returns the outbound messages
//! for the transport to deliver in order. Every failure path ends in a
//! message, never a panic.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::client::{self, GeocodingClient, WeatherClient};
use crate::config::Config;
use crate::dialogue::{ConversationId, DialogueStore, Selection, parse_selection};
use crate::error::InvalidPlaceName;
use crate::pipeline::{self, ResolutionOutcome};
use crate::report;

pub const MSG_INVALID_PLACE: &str = "Please enter a valid place name.";
pub const MSG_MULTIPLE_FOUND: &str = "Several places match that name. Please pick one of them.";
pub const MSG_LOOKUP_FAILED: &str = "Something went wrong, please try again.";
pub const MSG_CHOOSE_VALID_NUMBER: &str = "Please choose a valid place number.";
pub const MSG_ENTER_NUMBER: &str = "Please enter a number.";

static PLACE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w\s-]+$").expect("place-name pattern is valid"));

/// Pre-flight check for the `/weather` argument: letters, digits,
/// whitespace and hyphens only. Rejects the empty string.
pub fn validate_place_name(place: &str) -> Result<(), InvalidPlaceName> {
    if PLACE_NAME.is_match(place) { Ok(()) } else { Err(InvalidPlaceName) }
}

/// The conversational core: clients plus per-conversation dialogue state.
#[derive(Debug)]
pub struct WeatherBot {
    geocoder: Box<dyn GeocodingClient>,
    weather: Box<dyn WeatherClient>,
    dialogues: DialogueStore,
}

impl WeatherBot {
    pub fn new(geocoder: Box<dyn GeocodingClient>, weather: Box<dyn WeatherClient>) -> Self {
        Self { geocoder, weather, dialogues: DialogueStore::new() }
    }

    /// Wire the OpenWeather-backed clients from config.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let (geocoder, weather) = client::clients_from_config(config)?;
        Ok(Self::new(geocoder, weather))
    }

    /// Handle `/weather <place>`.
    ///
    /// A new request always supersedes a pending disambiguation for the
    /// conversation, whatever its own outcome turns out to be.
    pub async fn handle_weather_command(
        &self,
        conversation: ConversationId,
        place: &str,
    ) -> Vec<String> {
        self.dialogues.clear(conversation);

        if validate_place_name(place).is_err() {
            return vec![MSG_INVALID_PLACE.to_string()];
        }

        match pipeline::resolve(self.geocoder.as_ref(), self.weather.as_ref(), place).await {
            ResolutionOutcome::Direct(snapshot) => vec![report::weather_report(&snapshot)],
            ResolutionOutcome::Ambiguous(candidates) => {
                let listing = report::candidate_listing(&candidates);
                self.dialogues.begin(conversation, candidates);
                vec![MSG_MULTIPLE_FOUND.to_string(), listing]
            }
            ResolutionOutcome::NotFound => vec![format!("No place named {place} was found.")],
            ResolutionOutcome::LookupFailed(err) => {
                warn!("lookup failed for {place:?}: {err}");
                vec![MSG_LOOKUP_FAILED.to_string()]
            }
        }
    }

    /// Handle a plain-text message that may answer a pending disambiguation.
    ///
    /// Returns `None` when the conversation is idle; the transport drops
    /// such messages. Invalid selections re-prompt and keep the stored
    /// list; a transport failure after a valid selection clears the state
    /// and is not retried.
    pub async fn handle_reply(
        &self,
        conversation: ConversationId,
        text: &str,
    ) -> Option<Vec<String>> {
        let candidates = self.dialogues.pending(conversation)?;

        match parse_selection(text, candidates.len()) {
            Selection::Choice(index) => {
                self.dialogues.clear(conversation);
                let chosen = &candidates[index];
                debug!("conversation {} picked {:?}", conversation.0, chosen.name);

                match self.weather.fetch_snapshot(chosen.latitude, chosen.longitude).await {
                    Ok(snapshot) => Some(vec![report::weather_report(&snapshot)]),
                    Err(err) => {
                        warn!("weather fetch failed after selection: {err}");
                        Some(vec![MSG_LOOKUP_FAILED.to_string()])
                    }
                }
            }
            Selection::OutOfRange => Some(vec![MSG_CHOOSE_VALID_NUMBER.to_string()]),
            Selection::NotANumber => Some(vec![MSG_ENTER_NUMBER.to_string()]),
        }
    }
}
