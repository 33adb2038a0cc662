//! Forecast lookup route.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use forecast::ForecastResult;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Query parameters for a forecast lookup.
#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
    pub city: Option<String>,
    /// Accepted for symmetry with `/save`; only logged.
    pub name: Option<String>,
}

/// Fetch and return the normalized forecast for `city`.
pub async fn get_forecast(
    State(state): State<AppState>,
    query: std::result::Result<Query<ForecastQuery>, QueryRejection>,
) -> Result<Json<ForecastResult>> {
    let Query(query) = query.map_err(|rejection| {
        debug!(error = %rejection, "Unparsable forecast query");
        ApiError::Validation("Invalid query string")
    })?;

    let city = query
        .city
        .as_deref()
        .filter(|city| !city.is_empty())
        .ok_or(ApiError::Validation("city required"))?;

    info!(city, name = query.name.as_deref(), "Forecast requested");

    let forecast = state.forecast.fetch(city).await?;

    info!(
        city,
        resolved = forecast.city.as_deref(),
        days = forecast.forecast.len(),
        "Forecast returned"
    );
    Ok(Json(forecast))
}
