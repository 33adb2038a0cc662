//! Database models.

use chrono::{DateTime, Utc};
use forecast::ForecastResult;
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;

/// A forecast saved on behalf of a user.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct StoredForecastRecord {
    /// Auto-incrementing ID.
    pub id: i32,
    /// Name supplied by the caller.
    pub username: String,
    /// City as requested (not the upstream's canonical name).
    pub city: String,
    /// Normalized forecast, stored as JSONB.
    pub forecast_json: Json<ForecastResult>,
    /// Insert time, supplied by the application in UTC.
    pub created_at: DateTime<Utc>,
}
