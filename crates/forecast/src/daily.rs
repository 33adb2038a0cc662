//! Reduction of 3-hour samples to one entry per calendar day.

use std::collections::HashSet;

use chrono::DateTime;

use crate::models::{DailyForecast, ForecastResult};
use crate::upstream::{UpstreamForecast, UpstreamSample};

/// Maximum number of days in a normalized forecast.
pub const MAX_FORECAST_DAYS: usize = 5;

impl From<UpstreamForecast> for ForecastResult {
    fn from(upstream: UpstreamForecast) -> Self {
        let forecast = daily_forecasts(&upstream.list);
        let (city, country) = match upstream.city {
            Some(city) => (city.name, city.country),
            None => (None, None),
        };

        Self {
            city,
            country,
            forecast,
        }
    }
}

/// Pick the first sample of each calendar date, in encounter order.
///
/// Stops scanning once [`MAX_FORECAST_DAYS`] dates have been emitted.
pub fn daily_forecasts(samples: &[UpstreamSample]) -> Vec<DailyForecast> {
    let mut seen = HashSet::new();
    let mut days = Vec::with_capacity(MAX_FORECAST_DAYS);

    for sample in samples {
        let Some(date) = sample_date(sample) else {
            continue;
        };
        if !seen.insert(date.clone()) {
            continue;
        }

        days.push(DailyForecast {
            date,
            temp: sample.main.temp,
            feels_like: sample.main.feels_like,
            humidity: sample.main.humidity,
            description: sample
                .weather
                .first()
                .and_then(|condition| condition.description.clone()),
        });

        if days.len() >= MAX_FORECAST_DAYS {
            break;
        }
    }

    days
}

/// Date portion of the sample timestamp, falling back to `dt` in UTC.
fn sample_date(sample: &UpstreamSample) -> Option<String> {
    if let Some(text) = sample.dt_txt.as_deref() {
        if let Some(date) = text.split(' ').next().filter(|d| !d.is_empty()) {
            return Some(date.to_string());
        }
    }

    sample
        .dt
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|ts| ts.date_naive().format("%Y-%m-%d").to_string())
}
