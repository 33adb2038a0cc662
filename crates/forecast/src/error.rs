//! Error types for forecast fetching.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while fetching a forecast.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Upstream did not answer within the request timeout.
    #[error("weather API timed out after {0:?}")]
    Timeout(Duration),

    /// Upstream answered with a non-success status.
    #[error("weather API returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Upstream body could not be decoded.
    #[error("malformed weather API response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// HTTP request failed before a response arrived.
    #[error("weather API request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured base URL cannot be used.
    #[error("invalid weather API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ForecastError {
    /// Whether the failure is a timeout rather than an upstream error.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ForecastError::Timeout(_))
    }
}

/// Result type for forecast operations.
pub type Result<T> = std::result::Result<T, ForecastError>;
