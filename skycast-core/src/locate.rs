//! Device geolocation.
//!
//! Resolves the machine's position through a keyless IP geolocation service.
//! One request per user trigger, never automatic, no retries; failures
//! classify into exactly four cases, each with its own user-facing message.

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

/// Geolocation endpoint; no API key required.
pub const GEO_URL: &str = "http://ip-api.com/json";

const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum LocateError {
    #[error("geolocation permission denied")]
    PermissionDenied,
    #[error("geolocation information unavailable")]
    Unavailable,
    #[error("geolocation request timed out")]
    Timeout,
    #[error("geolocation failed: {0}")]
    Unknown(String),
}

impl LocateError {
    /// Message shown to the user; one distinct text per failure case.
    pub fn user_message(&self) -> &'static str {
        match self {
            LocateError::PermissionDenied => {
                "Geolocation permission was denied. You can grant permission and try again."
            }
            LocateError::Unavailable => {
                "Geolocation information is unavailable. Please check your device's location settings."
            }
            LocateError::Timeout => "Geolocation request timed out. Please try again.",
            LocateError::Unknown(_) => {
                "An error occurred while fetching geolocation. Please try again."
            }
        }
    }
}

#[async_trait]
pub trait Locator: Send + Sync + Debug {
    /// One current-position request.
    async fn current_position(&self) -> Result<Position, LocateError>;
}

#[derive(Debug, Clone)]
pub struct IpLocator {
    http: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct GeoResponse {
    status: String,
    lat: Option<f64>,
    lon: Option<f64>,
    message: Option<String>,
}

impl IpLocator {
    pub fn new() -> Result<Self, LocateError> {
        Self::with_base_url(GEO_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, LocateError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|err| LocateError::Unknown(err.to_string()))?;

        Ok(Self { http, base_url: base_url.into() })
    }
}

#[async_trait]
impl Locator for IpLocator {
    async fn current_position(&self) -> Result<Position, LocateError> {
        let res = self
            .http
            .get(&self.base_url)
            .send()
            .await
            .map_err(classify_transport)?;

        let status = res.status();
        if status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS {
            return Err(LocateError::PermissionDenied);
        }

        let parsed: GeoResponse = res
            .json()
            .await
            .map_err(|err| LocateError::Unknown(err.to_string()))?;

        if parsed.status != "success" {
            tracing::debug!(message = parsed.message.as_deref(), "geolocation lookup failed");
            return Err(LocateError::Unavailable);
        }

        match (parsed.lat, parsed.lon) {
            (Some(latitude), Some(longitude)) => Ok(Position { latitude, longitude }),
            _ => Err(LocateError::Unavailable),
        }
    }
}

fn classify_transport(err: reqwest::Error) -> LocateError {
    if err.is_timeout() {
        LocateError::Timeout
    } else if err.is_connect() {
        LocateError::Unavailable
    } else {
        LocateError::Unknown(err.to_string())
    }
}
