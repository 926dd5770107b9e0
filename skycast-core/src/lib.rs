//! Core library for the `skycast` weather lookup.
//!
//! This crate defines:
//! - Configuration & credential resolution
//! - The weather provider HTTP client
//! - Query-string routing and screen selection
//! - The result-card state machine and device geolocation
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod card;
pub mod client;
pub mod config;
pub mod locate;
pub mod model;
pub mod route;

pub use card::{CardView, FetchToken, WeatherCard};
pub use client::{WeatherClient, WeatherTarget};
pub use config::Config;
pub use locate::{IpLocator, LocateError, Locator, Position};
pub use model::WeatherPayload;
pub use route::{QueryState, Screen, select_screen};
