//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use database::DatabaseConfig;

/// Weather API server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// OpenWeather API key.
    pub openweather_api_key: String,
    /// OpenWeather base URL.
    pub openweather_base_url: String,
    /// Directory served under `/static`, if any.
    pub static_dir: Option<PathBuf>,
    /// PostgreSQL settings.
    pub database: DatabaseConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `WEATHER_API_ADDR` | Server bind address | `127.0.0.1:8080` |
    /// | `OPENWEATHER_API_KEY` | OpenWeather API key | (required) |
    /// | `OPENWEATHER_BASE_URL` | OpenWeather base URL | `https://api.openweathermap.org` |
    /// | `WEATHER_STATIC_DIR` | Front-end directory served under `/static` | (unset) |
    /// | `DB_*` | See [`DatabaseConfig::from_env`] | |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("WEATHER_API_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let openweather_api_key = env::var("OPENWEATHER_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let openweather_base_url = env::var("OPENWEATHER_BASE_URL")
            .unwrap_or_else(|_| forecast::DEFAULT_BASE_URL.to_string());

        let static_dir = env::var("WEATHER_STATIC_DIR")
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        let database = DatabaseConfig::from_env()?;

        Ok(Self {
            addr,
            openweather_api_key,
            openweather_base_url,
            static_dir,
            database,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid WEATHER_API_ADDR format")]
    InvalidAddr,

    #[error("OPENWEATHER_API_KEY environment variable is required")]
    MissingApiKey,

    #[error(transparent)]
    Database(#[from] database::DatabaseError),
}
