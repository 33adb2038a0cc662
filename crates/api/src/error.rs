//! Error types for the HTTP entry points.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors returned by request handlers.
///
/// Every variant renders as `{"error": <message>}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed client input.
    #[error("{0}")]
    Validation(&'static str),

    /// Weather API failure or timeout.
    #[error(transparent)]
    Forecast(#[from] forecast::ForecastError),

    /// Database connection or storage failure.
    #[error(transparent)]
    Database(#[from] database::DatabaseError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(msg) => {
                tracing::warn!("Rejected request: {}", msg);
                StatusCode::BAD_REQUEST
            }
            ApiError::Forecast(err) => {
                tracing::error!("Forecast error: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Database(err) => {
                tracing::error!("Database error: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = serde_json::json!({
            "error": self.to_string()
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
