//! OpenWeather forecast client.

use std::time::Duration;

use tracing::{debug, info, warn};
use url::Url;

use crate::error::{ForecastError, Result};
use crate::models::ForecastResult;
use crate::upstream::UpstreamForecast;

/// Public OpenWeather API host.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// Upstream request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const FORECAST_PATH: &str = "data/2.5/forecast";

/// Client that fetches a 5-day / 3-hour forecast and reduces it to daily
/// entries.
///
/// Cloning is cheap; clones share the underlying connection pool.
///
/// # Example
///
/// ```no_run
/// # async fn example() -> forecast::Result<()> {
/// let client = forecast::ForecastClient::new("my-api-key")?;
/// let result = client.fetch("London").await?;
/// for day in &result.forecast {
///     println!("{}: {:?}", day.date, day.temp);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl ForecastClient {
    /// Create a client for the public OpenWeather API.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against a different host (proxies, mock servers).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(api_key, base_url, REQUEST_TIMEOUT)
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Url::parse(&base_url)?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url,
            timeout,
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the forecast for `city` and normalize it to at most five days.
    ///
    /// # Errors
    ///
    /// - [`ForecastError::Timeout`] if no response arrives in time.
    /// - [`ForecastError::Status`] on a non-success status.
    /// - [`ForecastError::Malformed`] if the body is not a forecast document.
    pub async fn fetch(&self, city: &str) -> Result<ForecastResult> {
        let url = self.forecast_url(city)?;

        debug!(city, "Fetching forecast");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(city, status = status.as_u16(), "Weather API returned an error");
            return Err(ForecastError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await.map_err(|e| self.classify(e))?;
        let upstream: UpstreamForecast = serde_json::from_slice(&body)?;
        let result = ForecastResult::from(upstream);

        info!(city, days = result.forecast.len(), "Fetched forecast");
        Ok(result)
    }

    fn forecast_url(&self, city: &str) -> Result<Url> {
        let url = Url::parse_with_params(
            &format!("{}/{}", self.base_url, FORECAST_PATH),
            &[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ],
        )?;
        Ok(url)
    }

    /// The request URL carries the API key, so it is stripped from errors.
    fn classify(&self, err: reqwest::Error) -> ForecastError {
        if err.is_timeout() {
            ForecastError::Timeout(self.timeout)
        } else {
            ForecastError::Http(err.without_url())
        }
    }
}
