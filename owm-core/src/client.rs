use serde::Deserialize;

use crate::config::ClientConfig;
use crate::de;
use crate::error::Error;
use crate::http::{HttpTransport, ReqwestTransport};
use crate::model::CurrentWeather;
use crate::query::{Location, RequestOptions};

const CURRENT_WEATHER_PATH: &str = "/weather";

/// Error body the API sends alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Client for the OpenWeatherMap current-weather API.
///
/// Holds read-only configuration and a transport; every call is one GET,
/// no retries, no caching, no state carried between calls.
#[derive(Debug)]
pub struct OwmClient {
    config: ClientConfig,
    transport: Box<dyn HttpTransport>,
}

impl OwmClient {
    /// Build a client with the default transport, resolving the API key
    /// from the argument or the environment (see [`ClientConfig::resolve`]).
    pub fn new(api_key: Option<&str>) -> Result<Self, Error> {
        Self::with_config(ClientConfig::resolve(api_key)?)
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, Error> {
        Ok(Self {
            config,
            transport: Box::new(ReqwestTransport::new()?),
        })
    }

    /// Inject a custom transport; the seam the tests use.
    pub fn with_transport(config: ClientConfig, transport: Box<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Current weather by geographic coordinates.
    /// lat ∈ [-90, 90], lon ∈ [-180, 180].
    pub async fn current_weather_by_coords(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<CurrentWeather, Error> {
        self.current_weather(Location::Coords { lat, lon }).await
    }

    /// Current weather by city name, optionally narrowed by country code.
    pub async fn current_weather_by_city(
        &self,
        name: &str,
        country: Option<&str>,
    ) -> Result<CurrentWeather, Error> {
        self.current_weather(Location::City {
            name: name.to_owned(),
            country: country.map(str::to_owned),
        })
        .await
    }

    /// Current weather by OpenWeatherMap city id.
    pub async fn current_weather_by_city_id(&self, id: u64) -> Result<CurrentWeather, Error> {
        self.current_weather(Location::CityId(id)).await
    }

    /// Current weather by zip/postal code and country code.
    pub async fn current_weather_by_zip(
        &self,
        zip: &str,
        country: &str,
    ) -> Result<CurrentWeather, Error> {
        self.current_weather(Location::Zip {
            zip: zip.to_owned(),
            country: country.to_owned(),
        })
        .await
    }

    /// Current weather for any query mode, with the client defaults.
    pub async fn current_weather(&self, location: Location) -> Result<CurrentWeather, Error> {
        self.current_weather_with(location, &RequestOptions::default())
            .await
    }

    /// Current weather with per-call unit/language overrides.
    pub async fn current_weather_with(
        &self,
        location: Location,
        options: &RequestOptions,
    ) -> Result<CurrentWeather, Error> {
        location.validate()?;

        let params = self.build_params(&location, options);
        let url = format!("{}{}", self.config.base_url, CURRENT_WEATHER_PATH);

        tracing::debug!(%url, mode = ?location, "requesting current weather");
        let res = self.transport.get(&url, &params).await?;
        tracing::debug!(status = res.status, "received API response");

        match res.status {
            200..=299 => de::current_weather_from_str(&res.body),
            status => Err(map_api_error(status, &res.body)),
        }
    }

    fn build_params(
        &self,
        location: &Location,
        options: &RequestOptions,
    ) -> Vec<(String, String)> {
        let mut params = location.query_params();
        params.push(("appid".into(), self.config.api_key.clone()));

        if let Some(units) = options.units.or(self.config.units) {
            params.push(("units".into(), units.as_str().into()));
        }
        if let Some(lang) = options
            .language
            .as_deref()
            .or(self.config.language.as_deref())
        {
            params.push(("lang".into(), lang.into()));
        }

        params
    }
}

/// Map a non-2xx status to its error kind, keeping the API's message.
fn map_api_error(status: u16, body: &str) -> Error {
    let message = api_message(status, body);
    match status {
        401 | 403 => Error::Authentication { status, message },
        404 => Error::NotFound { status, message },
        429 => Error::RateLimit { status, message },
        500..=599 => Error::Server { status, message },
        _ => Error::Api { status, message },
    }
}

/// The API reports failures as `{"cod": ..., "message": ...}`; fall back to
/// the bare status when the body is not that shape.
fn api_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| format!("HTTP {status}"))
}
