//! HTTP entry points for city forecasts.
//!
//! - `GET /weather?city=<city>` returns the normalized five-day forecast.
//! - `POST /save` with `{"name", "city"}` fetches the forecast, stores it and
//!   returns the new record id.

mod config;
mod error;
mod routes;
mod state;

use database::Database;
use forecast::ForecastClient;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    info!(addr = %config.addr, database = ?config.database, "Starting weather API");

    let forecast = ForecastClient::with_base_url(
        config.openweather_api_key.as_str(),
        config.openweather_base_url.as_str(),
    )?;
    info!(upstream = forecast.base_url(), "Weather API client ready");

    // Connects on the first save, not here.
    let db = Database::new(&config.database);

    let state = AppState::new(forecast, db);

    let mut app = routes::router();
    if let Some(dir) = &config.static_dir {
        info!(dir = %dir.display(), "Serving static files under /static");
        app = app.nest_service("/static", ServeDir::new(dir));
    }
    let app = app.layer(TraceLayer::new_for_http()).with_state(state);

    info!(addr = %config.addr, "Weather API listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
