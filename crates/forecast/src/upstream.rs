//! OpenWeather `/data/2.5/forecast` response types.
//!
//! Every field is optional so a sparse document still decodes; only a body
//! that is not a JSON object at all is rejected.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct UpstreamForecast {
    #[serde(default)]
    pub list: Vec<UpstreamSample>,
    #[serde(default)]
    pub city: Option<UpstreamCity>,
}

/// One 3-hour sample.
#[derive(Debug, Default, Deserialize)]
pub struct UpstreamSample {
    /// Unix timestamp (seconds, UTC).
    #[serde(default)]
    pub dt: Option<i64>,
    /// `"YYYY-MM-DD HH:MM:SS"` in UTC.
    #[serde(default)]
    pub dt_txt: Option<String>,
    #[serde(default)]
    pub main: UpstreamMain,
    #[serde(default)]
    pub weather: Vec<UpstreamCondition>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpstreamMain {
    #[serde(default)]
    pub temp: Option<f64>,
    #[serde(default)]
    pub feels_like: Option<f64>,
    #[serde(default)]
    pub humidity: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpstreamCondition {
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpstreamCity {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}
