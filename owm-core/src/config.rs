use crate::error::Error;
use crate::query::Units;

/// Environment variable consulted when no explicit API key is given.
pub const API_KEY_ENV: &str = "OPENWEATHERMAP_API_KEY";

/// Base URL for the current-weather API family.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Read-only client configuration, resolved once at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    /// Default measurement system for every call; per-call options override.
    pub units: Option<Units>,
    /// Default description language (e.g. "de"); omitted from the URL when unset.
    pub language: Option<String>,
}

impl ClientConfig {
    /// Resolve configuration from an explicit key, falling back to the
    /// [`API_KEY_ENV`] environment variable. Neither present (or empty) is a
    /// configuration error, raised here rather than on first call.
    pub fn resolve(api_key: Option<&str>) -> Result<Self, Error> {
        let api_key = api_key
            .map(str::to_owned)
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                Error::Configuration(format!(
                    "API key is required; pass it explicitly or set the {API_KEY_ENV} \
                     environment variable"
                ))
            })?;

        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            units: Some(Units::Metric),
            language: None,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_units(mut self, units: Option<Units>) -> Self {
        self.units = units;
        self
    }

    pub fn with_language(mut self, language: Option<String>) -> Self {
        self.language = language;
        self
    }
}
