//! Interactive chat session: the stand-in for a chat transport.
//!
//! Reads one line per inbound message, dispatches slash commands the way
//! the transport's command parser would, and prints each outbound message
//! on its own line.

use anyhow::Result;
use inquire::{InquireError, Text};
use weatherbot_core::{ConversationId, WeatherBot};

const HELP: &str = "Available commands:\n\
    /weather <place name> - current weather for a place\n\
    /help - what this bot can do\n\
    /quit - leave the chat";

/// One conversation per process run.
const CONVERSATION: ConversationId = ConversationId(0);

pub async fn run(bot: &WeatherBot) -> Result<()> {
    println!("{}", greeting());

    loop {
        let line = match Text::new(">").prompt() {
            Ok(line) => line,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match split_command(line) {
            Some(("/quit", _)) => break,
            Some(("/start", _)) => println!("{}", greeting()),
            Some(("/help", _)) => println!("{HELP}"),
            Some(("/weather", place)) => {
                for reply in bot.handle_weather_command(CONVERSATION, place.trim()).await {
                    println!("{reply}");
                }
            }
            Some(_) => println!("Unknown command. Try /help."),
            None => {
                // Plain text only matters while a disambiguation is pending.
                if let Some(replies) = bot.handle_reply(CONVERSATION, line).await {
                    for reply in replies {
                        println!("{reply}");
                    }
                }
            }
        }
    }

    Ok(())
}

/// Split a leading slash command from its free-text argument.
fn split_command(line: &str) -> Option<(&str, &str)> {
    if !line.starts_with('/') {
        return None;
    }

    Some(match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest),
        None => (line, ""),
    })
}

fn greeting() -> String {
    // Same fallback chain as a chat transport's display name: the OS user
    // name when available, else a generic address.
    let name = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "there".to_string());

    format!("Hello, {name}!\nI can look up the current weather for any place. Type /help to see how.")
}
