use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;

use crate::model::{self, WeatherPayload};

/// Provider endpoint for current weather.
pub const API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// What to ask the provider for: a city name, or a coordinate pair carried
/// verbatim from the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeatherTarget {
    City(String),
    Coords { latitude: String, longitude: String },
}

impl WeatherTarget {
    fn query_pairs<'a>(&'a self, api_key: &'a str) -> Vec<(&'static str, &'a str)> {
        match self {
            WeatherTarget::City(city) => vec![("q", city.as_str()), ("appid", api_key)],
            WeatherTarget::Coords { latitude, longitude } => vec![
                ("lat", latitude.as_str()),
                ("lon", longitude.as_str()),
                ("appid", api_key),
            ],
        }
    }
}

#[derive(Debug, Clone)]
pub struct WeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

/// Minimal probe of the response body: the provider signals logical failure
/// through `cod`, not the HTTP status line alone.
#[derive(Debug, Deserialize)]
struct StatusProbe {
    #[serde(deserialize_with = "model::cod_as_i64")]
    cod: i64,
}

impl WeatherClient {
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_base_url(api_key, API_URL)
    }

    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { api_key, base_url: base_url.into(), http })
    }

    /// One GET against the provider. `None` covers both "city not found"
    /// (non-200 `cod`) and transport/parse failures; the latter are logged
    /// and otherwise indistinguishable to the caller. No retries.
    pub async fn fetch(&self, target: &WeatherTarget) -> Option<WeatherPayload> {
        match self.fetch_inner(target).await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!("weather request failed: {err:#}");
                None
            }
        }
    }

    async fn fetch_inner(&self, target: &WeatherTarget) -> Result<Option<WeatherPayload>> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&target.query_pairs(&self.api_key))
            .send()
            .await
            .context("Failed to send request to the weather provider")?;

        // Logical errors arrive as a JSON body with a non-200 `cod` (and
        // usually a non-200 HTTP status); read the body either way.
        let body = res
            .text()
            .await
            .context("Failed to read weather provider response body")?;

        let probe: StatusProbe =
            serde_json::from_str(&body).context("Failed to parse weather provider JSON")?;

        if probe.cod != 200 {
            tracing::debug!(cod = probe.cod, "provider reported no data");
            return Ok(None);
        }

        let payload: WeatherPayload =
            serde_json::from_str(&body).context("Failed to parse weather payload")?;

        Ok(Some(payload))
    }
}
