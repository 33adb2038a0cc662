//! Connection settings loaded from environment variables.

use std::env;
use std::fmt;

use sqlx::postgres::PgConnectOptions;

use crate::{DatabaseError, Result};

/// PostgreSQL connection settings.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
}

impl DatabaseConfig {
    /// Port used when `DB_PORT` is unset.
    pub const DEFAULT_PORT: u16 = 5432;

    /// Load settings from the environment.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `DB_HOST` | Server host | (required) |
    /// | `DB_PORT` | Server port | `5432` |
    /// | `DB_NAME` | Database name | (required) |
    /// | `DB_USER` | Login role | (required) |
    /// | `DB_PASSWORD` | Login password | (required) |
    pub fn from_env() -> Result<Self> {
        let port = match env::var("DB_PORT") {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|_| DatabaseError::Config(format!("invalid DB_PORT: {value}")))?,
            Err(_) => Self::DEFAULT_PORT,
        };

        Ok(Self {
            host: required("DB_HOST")?,
            port,
            name: required("DB_NAME")?,
            user: required("DB_USER")?,
            password: required("DB_PASSWORD")?,
        })
    }

    /// Build sqlx connect options for these settings.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.name)
            .username(&self.user)
            .password(&self.password)
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn required(name: &str) -> Result<String> {
    env::var(name)
        .map_err(|_| DatabaseError::Config(format!("{name} environment variable is required")))
}
