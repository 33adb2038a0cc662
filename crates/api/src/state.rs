//! Application state shared across handlers.

use database::Database;
use forecast::ForecastClient;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Weather API client.
    pub forecast: ForecastClient,
    /// Lazily connected database.
    pub db: Database,
}

impl AppState {
    /// Create new application state.
    pub fn new(forecast: ForecastClient, db: Database) -> Self {
        Self { forecast, db }
    }
}
