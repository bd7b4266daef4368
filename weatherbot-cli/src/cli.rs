use clap::{Parser, Subcommand};
use inquire::Text;
use weatherbot_core::{Config, WeatherBot};

use crate::chat;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weatherbot", version, about = "Conversational weather lookup")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key used for geocoding and weather lookups.
    Configure,

    /// Start an interactive chat session.
    Chat,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Chat => {
                let config = Config::load()?;
                let bot = WeatherBot::from_config(&config)?;
                chat::run(&bot).await
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Text::new("OpenWeather API key:").prompt()?;
    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}
