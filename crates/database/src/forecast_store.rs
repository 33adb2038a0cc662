//! Saved forecast persistence.
//!
//! The table is ensured inside the same transaction as every insert, so a
//! fresh database needs no migration step and a failed save leaves no row.

use chrono::Utc;
use forecast::ForecastResult;
use sqlx::types::Json;
use sqlx::Connection;
use tracing::{debug, info};

use crate::models::StoredForecastRecord;
use crate::{Database, DatabaseError, Result};

const ENSURE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS user_forecasts (
        id SERIAL PRIMARY KEY,
        username TEXT,
        city TEXT,
        forecast_json JSONB,
        created_at TIMESTAMPTZ DEFAULT NOW()
    )
"#;

/// Save a forecast for `username` and return the generated record id.
///
/// Table creation, insert and commit run in one transaction; dropping the
/// transaction on any error rolls it back.
pub async fn save_forecast(
    db: &Database,
    username: &str,
    city: &str,
    forecast: &ForecastResult,
) -> Result<i32> {
    let mut conn = db.connection().await?;
    let mut tx = conn.begin().await?;

    sqlx::query(ENSURE_TABLE).execute(&mut *tx).await?;
    debug!("user_forecasts table ensured");

    let id: i32 = sqlx::query_scalar(
        r#"
        INSERT INTO user_forecasts (username, city, forecast_json, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(username)
    .bind(city)
    .bind(Json(forecast))
    .bind(Utc::now())
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    info!(id, username, city, days = forecast.forecast.len(), "Saved forecast");
    Ok(id)
}

/// Load a saved forecast by id.
pub async fn find_forecast(db: &Database, id: i32) -> Result<StoredForecastRecord> {
    let mut conn = db.connection().await?;

    sqlx::query_as::<_, StoredForecastRecord>(
        r#"
        SELECT id, username, city, forecast_json, created_at
        FROM user_forecasts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "forecast",
        id: id.to_string(),
    })
}
