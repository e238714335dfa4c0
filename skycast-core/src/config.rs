use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default endpoint for current conditions.
pub const DEFAULT_CURRENT_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Default endpoint for the 5-day / 3-hour forecast.
pub const DEFAULT_FORECAST_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// current_url = "https://api.openweathermap.org/data/2.5/weather"
/// forecast_url = "https://api.openweathermap.org/data/2.5/forecast"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// OpenWeatherMap API key. Lookups fail until one is configured.
    pub api_key: Option<String>,

    /// Endpoint queried for current conditions.
    #[serde(default = "default_current_url")]
    pub current_url: String,

    /// Endpoint queried for the multi-day forecast.
    #[serde(default = "default_forecast_url")]
    pub forecast_url: String,
}

fn default_current_url() -> String {
    DEFAULT_CURRENT_URL.to_string()
}

fn default_forecast_url() -> String {
    DEFAULT_FORECAST_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            current_url: default_current_url(),
            forecast_url: default_forecast_url(),
        }
    }
}

impl Config {
    /// Load config from disk and apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut cfg = Self::load_from(&Self::config_file_path()?)?;
        cfg.apply_overrides(|name| std::env::var(name).ok());
        Ok(cfg)
    }

    /// Load config from a specific path, or return an empty default if the
    /// file doesn't exist yet.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Apply `SKYCAST_API_KEY`, `SKYCAST_CURRENT_URL` and
    /// `SKYCAST_FORECAST_URL` from the given lookup (usually
    /// `std::env::var`). Values from the lookup win over the file.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup("SKYCAST_API_KEY") {
            self.api_key = Some(key);
        }
        if let Some(url) = lookup("SKYCAST_CURRENT_URL") {
            self.current_url = url;
        }
        if let Some(url) = lookup("SKYCAST_FORECAST_URL") {
            self.forecast_url = url;
        }
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save config to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Set or replace the API key.
    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}
