use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong during a weather lookup.
///
/// Each variant carries the exact message shown to the user. Nothing is
/// retried, and no variant changes the behavior of later lookups.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Please enter a city name.")]
    EmptyCity,

    #[error("City name contains invalid characters.")]
    InvalidCity,

    #[error(
        "API key is missing.\n\
         Hint: run `skycast configure` and enter your OpenWeatherMap API key."
    )]
    MissingApiKey,

    #[error("City '{0}' not found. Please check the name.")]
    CityNotFound(String),

    #[error(
        "Invalid API key.\n\
         Hint: run `skycast configure` to replace it."
    )]
    InvalidApiKey,

    #[error("API error (status {status}): {body}")]
    Api { status: StatusCode, body: String },

    #[error("Connection error. Please check your internet connection.")]
    Network(#[source] reqwest::Error),

    #[error("Error parsing weather data. Unexpected response format.")]
    MalformedPayload,
}
