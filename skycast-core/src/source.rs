use crate::{
    Config, CurrentConditions, ForecastDay, WeatherError, source::openweather::OpenWeatherSource,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Abstraction over the upstream weather API.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    /// Current conditions for a city.
    async fn current(&self, city: &str) -> Result<CurrentConditions, WeatherError>;

    /// Daily forecast entries for a city, ordered by ascending date.
    async fn forecast(&self, city: &str) -> Result<Vec<ForecastDay>, WeatherError>;
}

/// Construct the weather source from config.
///
/// Fails when no API key is configured; endpoint URLs always have a value.
pub fn source_from_config(config: &Config) -> Result<Box<dyn WeatherSource>, WeatherError> {
    let api_key = config.api_key.as_deref().ok_or(WeatherError::MissingApiKey)?;

    Ok(Box::new(OpenWeatherSource::new(
        api_key.to_owned(),
        config.current_url.clone(),
        config.forecast_url.clone(),
    )))
}
