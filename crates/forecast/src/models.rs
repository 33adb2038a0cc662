//! Forecast models returned to callers.

use serde::{Deserialize, Serialize};

/// One representative reading for a calendar day.
///
/// Every field except `date` mirrors the upstream sample and is `None` when the
/// upstream left it out. Missing values serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    /// Calendar date (`YYYY-MM-DD`).
    pub date: String,
    /// Temperature in degrees Celsius.
    pub temp: Option<f64>,
    /// Perceived temperature in degrees Celsius.
    pub feels_like: Option<f64>,
    /// Relative humidity in percent.
    pub humidity: Option<i64>,
    /// Human readable condition (e.g. "light rain").
    pub description: Option<String>,
}

/// A normalized multi-day forecast for one city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    /// City name as reported by the upstream.
    pub city: Option<String>,
    /// ISO country code as reported by the upstream.
    pub country: Option<String>,
    /// At most five days, in upstream order, one entry per date.
    pub forecast: Vec<DailyForecast>,
}
