use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

use crate::{
    error::WeatherError,
    model::{CurrentConditions, ForecastDay},
};

use super::WeatherSource;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// OpenWeatherMap client: current conditions plus the 5-day / 3-hour
/// forecast, both queried with `q=<city>&appid=<key>&units=metric`.
#[derive(Debug, Clone)]
pub struct OpenWeatherSource {
    api_key: String,
    current_url: String,
    forecast_url: String,
    http: Client,
}

impl OpenWeatherSource {
    pub fn new(api_key: String, current_url: String, forecast_url: String) -> Self {
        Self {
            api_key,
            current_url,
            forecast_url,
            http: Client::new(),
        }
    }

    async fn get_json(&self, url: &str, city: &str) -> Result<String, WeatherError> {
        let res = self
            .http
            .get(url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(WeatherError::Network)?;

        let status = res.status();
        let body = res.text().await.map_err(WeatherError::Network)?;

        tracing::debug!(%url, %status, "openweathermap response");

        match status {
            StatusCode::NOT_FOUND => Err(WeatherError::CityNotFound(city.to_string())),
            StatusCode::UNAUTHORIZED => Err(WeatherError::InvalidApiKey),
            s if !s.is_success() => Err(WeatherError::Api {
                status: s,
                body: truncate_body(&body),
            }),
            _ => Ok(body),
        }
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherSource {
    async fn current(&self, city: &str) -> Result<CurrentConditions, WeatherError> {
        let body = self.get_json(&self.current_url, city).await?;

        let parsed: OwCurrentResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::debug!(error = %e, "undecodable current weather payload");
            WeatherError::MalformedPayload
        })?;

        current_from_response(parsed)
    }

    async fn forecast(&self, city: &str) -> Result<Vec<ForecastDay>, WeatherError> {
        let body = self.get_json(&self.forecast_url, city).await?;

        let parsed: OwForecastResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::debug!(error = %e, "undecodable forecast payload");
            WeatherError::MalformedPayload
        })?;

        daily_from_entries(parsed.list)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt_txt: String,
    main: OwMain,
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}

fn current_from_response(parsed: OwCurrentResponse) -> Result<CurrentConditions, WeatherError> {
    // An empty `weather` array is a malformed response, not "Unknown".
    let condition = parsed
        .weather
        .first()
        .map(|w| title_case(&w.description))
        .ok_or(WeatherError::MalformedPayload)?;

    let observed_at = DateTime::from_timestamp(parsed.dt, 0).unwrap_or_else(Utc::now);

    Ok(CurrentConditions {
        city: parsed.name,
        observed_at,
        temperature_c: parsed.main.temp,
        condition,
        humidity_pct: parsed.main.humidity,
        wind_speed_mps: parsed.wind.speed,
    })
}

/// Group 3-hour entries by the date part of `dt_txt` and summarize each
/// day: max/min temperature plus the most frequent condition description.
fn daily_from_entries(entries: Vec<OwForecastEntry>) -> Result<Vec<ForecastDay>, WeatherError> {
    let mut days: BTreeMap<NaiveDate, DayAccumulator> = BTreeMap::new();

    for entry in entries {
        let date_part = entry.dt_txt.split(' ').next().unwrap_or("");
        let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .map_err(|_| WeatherError::MalformedPayload)?;

        let condition = entry
            .weather
            .first()
            .map(|w| w.description.clone())
            .ok_or(WeatherError::MalformedPayload)?;

        let day = days.entry(date).or_default();
        day.temps.push(entry.main.temp);
        day.conditions.push(condition);
    }

    Ok(days
        .into_iter()
        .map(|(date, day)| day.into_forecast(date))
        .collect())
}

#[derive(Debug, Default)]
struct DayAccumulator {
    temps: Vec<f64>,
    conditions: Vec<String>,
}

impl DayAccumulator {
    fn into_forecast(self, date: NaiveDate) -> ForecastDay {
        let max_temp_c = self.temps.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min_temp_c = self.temps.iter().copied().fold(f64::INFINITY, f64::min);

        ForecastDay {
            date,
            max_temp_c,
            min_temp_c,
            condition: title_case(most_frequent(&self.conditions)),
        }
    }
}

/// Most frequent string; the first-seen one wins ties.
fn most_frequent(values: &[String]) -> &str {
    let mut best: Option<(&str, usize)> = None;

    for value in values {
        let count = values.iter().filter(|v| *v == value).count();
        match best {
            Some((_, n)) if n >= count => {}
            _ => best = Some((value, count)),
        }
    }

    best.map_or("", |(value, _)| value)
}

/// Capitalize each whitespace-separated word, as the display expects
/// ("clear sky" -> "Clear Sky").
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
