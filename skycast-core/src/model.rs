use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Base URL for provider condition icons.
pub const ICON_BASE_URL: &str = "https://openweathermap.org/img/w";

/// The provider reports temperatures in Kelvin.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Current-weather body returned by the provider on success.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherPayload {
    #[serde(deserialize_with = "cod_as_i64")]
    pub cod: i64,
    pub name: String,
    pub sys: Sys,
    pub main: MainReadings,
    pub weather: Vec<Condition>,
    /// Observation timestamp (unix seconds); always sent by the provider.
    #[serde(default)]
    pub dt: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sys {
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MainReadings {
    /// Kelvin, as delivered by the provider.
    pub temp: f64,
    pub humidity: u8,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Condition {
    pub description: String,
    pub icon: String,
}

impl WeatherPayload {
    pub fn temperature_celsius(&self) -> f64 {
        self.main.temp - KELVIN_OFFSET
    }

    /// First condition entry, if the provider sent any.
    pub fn primary(&self) -> Option<&Condition> {
        self.weather.first()
    }

    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        self.dt.and_then(|ts| DateTime::from_timestamp(ts, 0))
    }
}

impl Condition {
    pub fn icon_url(&self) -> String {
        format!("{ICON_BASE_URL}/{}.png", self.icon)
    }

    /// Terminal stand-in for the provider icon, keyed by icon code family
    /// ("01d" and "01n" are both clear sky).
    pub fn glyph(&self) -> &'static str {
        match self.icon.get(..2) {
            Some("01") => "☀",
            Some("02") => "⛅",
            Some("03") | Some("04") => "☁",
            Some("09") | Some("10") => "🌧",
            Some("11") => "⛈",
            Some("13") => "❄",
            Some("50") => "🌫",
            _ => "·",
        }
    }
}

/// The provider encodes `cod` as a number on success and a string on errors
/// (e.g. `"404"` for an unknown city), so accept both.
pub(crate) fn cod_as_i64<'de, D>(de: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    match Raw::deserialize(de)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}
