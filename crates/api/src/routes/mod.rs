//! Route handlers.

pub mod health;
pub mod save;
pub mod weather;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/weather", get(weather::get_forecast))
        .route("/save", post(save::save_forecast))
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::body::Body;
    use axum::http::Response;
    use database::{Database, DatabaseConfig};
    use forecast::ForecastClient;

    use crate::state::AppState;

    /// State whose database is never reachable; the handle stays lazy.
    pub fn test_state(weather_base_url: &str) -> AppState {
        let forecast = ForecastClient::with_base_url("test-key", weather_base_url).unwrap();
        let db = Database::new(&DatabaseConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            name: "weather".to_string(),
            user: "app".to_string(),
            password: "secret".to_string(),
        });
        AppState::new(forecast, db)
    }

    pub async fn json_body(response: Response<Body>) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }
}
