//! OpenWeather forecast client.
//!
//! Fetches the 5-day / 3-hour forecast for a city and reduces it to one entry
//! per calendar day: the first sample of each date wins and at most five dates
//! are kept. See [`daily_forecasts`] for the reduction itself.

pub mod client;
pub mod daily;
pub mod error;
pub mod models;
pub mod upstream;

pub use client::{ForecastClient, DEFAULT_BASE_URL, REQUEST_TIMEOUT};
pub use daily::{daily_forecasts, MAX_FORECAST_DAYS};
pub use error::{ForecastError, Result};
pub use models::{DailyForecast, ForecastResult};
