//! Core library for the `skycast` weather app.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - City-input validation
//! - The weather source abstraction and its OpenWeatherMap implementation
//! - Shared domain models and the lookup error taxonomy
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod source;
pub mod validate;

pub use config::Config;
pub use error::WeatherError;
pub use model::{CurrentConditions, ForecastDay};
pub use source::{WeatherSource, source_from_config};
pub use validate::validate_city;
