use anyhow::Result;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use skycast_core::{Config, WeatherError, WeatherSource, source_from_config, validate_city};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "City weather lookup")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key.
    Configure,

    /// Show current conditions and the forecast for a city, then exit.
    Show {
        /// City name, e.g. "London" or "New York".
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::Show { city }) => {
                let source = source_from_config(&Config::load()?)?;
                lookup_and_render(source.as_ref(), &city).await?;
                Ok(())
            }
            None => interactive().await,
        }
    }
}

/// Prompt for the API key and persist it.
fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeatherMap API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;

    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("Saved API key to {}", Config::config_file_path()?.display());
    Ok(())
}

/// Prompt loop: one city per round, tables on success, message on failure.
/// A lookup error never ends the session; Esc or Ctrl-C does.
async fn interactive() -> Result<()> {
    let source = source_from_config(&Config::load()?)?;

    println!("skycast — city weather lookup (Esc to quit)");

    loop {
        let city = match Text::new("City:").prompt() {
            Ok(city) => city,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        if let Err(e) = lookup_and_render(source.as_ref(), &city).await {
            eprintln!("{e}");
        }
    }

    Ok(())
}

/// One search: validate locally, fetch current + forecast, render both
/// display regions.
async fn lookup_and_render(source: &dyn WeatherSource, input: &str) -> Result<(), WeatherError> {
    let city = validate_city(input)?;

    println!("Fetching weather data...");
    let current = source.current(city).await?;
    let forecast = source.forecast(city).await?;

    println!();
    println!("{}", render::current_table(&current));
    println!();
    println!("{}", render::forecast_table(&forecast));
    println!();
    println!("Weather data for '{city}'");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use skycast_core::{CurrentConditions, ForecastDay};

    /// A source that must never be reached; invalid input has to be
    /// rejected before any network-facing call.
    #[derive(Debug)]
    struct UnreachableSource;

    #[async_trait]
    impl WeatherSource for UnreachableSource {
        async fn current(&self, _city: &str) -> Result<CurrentConditions, WeatherError> {
            panic!("current() must not be called for invalid input");
        }

        async fn forecast(&self, _city: &str) -> Result<Vec<ForecastDay>, WeatherError> {
            panic!("forecast() must not be called for invalid input");
        }
    }

    #[tokio::test]
    async fn empty_input_never_reaches_the_source() {
        let err = lookup_and_render(&UnreachableSource, "")
            .await
            .unwrap_err();
        assert!(matches!(err, WeatherError::EmptyCity));
    }

    #[tokio::test]
    async fn whitespace_input_never_reaches_the_source() {
        let err = lookup_and_render(&UnreachableSource, "   \t")
            .await
            .unwrap_err();
        assert!(matches!(err, WeatherError::EmptyCity));
    }

    #[tokio::test]
    async fn invalid_characters_never_reach_the_source() {
        let err = lookup_and_render(&UnreachableSource, "London123")
            .await
            .unwrap_err();
        assert!(matches!(err, WeatherError::InvalidCity));
    }
}
