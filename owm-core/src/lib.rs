//! Typed client for the OpenWeatherMap current-weather API.
//!
//! This crate defines:
//! - Configuration & API-key resolution
//! - Query modes, units and parameter building
//! - The client and its transport abstraction
//! - Typed response models and a strict deserializer
//! - A closed error taxonomy callers can branch on
//!
//! It is used by `owm-cli`, but can also be reused by other binaries or services.
//!
//! ```no_run
//! use owm_core::OwmClient;
//!
//! # async fn run() -> Result<(), owm_core::Error> {
//! let client = OwmClient::new(Some("<YOUR-API-KEY>"))?;
//! let weather = client.current_weather_by_coords(44.34, 10.99).await?;
//! println!("Temperature: {}°", weather.main.temp);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod de;
pub mod error;
pub mod http;
pub mod model;
pub mod query;

pub use client::OwmClient;
pub use config::{API_KEY_ENV, ClientConfig, DEFAULT_BASE_URL};
pub use error::Error;
pub use http::{HttpResponse, HttpTransport, ReqwestTransport};
pub use model::{
    Clouds, Coord, CurrentWeather, MainMetrics, Precipitation, Sys, WeatherCondition, Wind,
};
pub use query::{Location, RequestOptions, Units};
