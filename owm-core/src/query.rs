use crate::error::Error;

/// Measurement system for temperature and wind speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Units {
    /// Kelvin, metre/sec (the API default).
    Standard,
    /// Celsius, metre/sec.
    Metric,
    /// Fahrenheit, miles/hour.
    Imperial,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Standard => "standard",
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    pub const fn all() -> &'static [Units] {
        &[Units::Standard, Units::Metric, Units::Imperial]
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Units {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "standard" => Ok(Units::Standard),
            "metric" => Ok(Units::Metric),
            "imperial" => Ok(Units::Imperial),
            _ => Err(Error::validation(
                "units",
                format!("'{value}' is not one of: standard, metric, imperial"),
            )),
        }
    }
}

impl std::str::FromStr for Units {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Units::try_from(s)
    }
}

/// The four supported ways to identify a location.
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    Coords { lat: f64, lon: f64 },
    City { name: String, country: Option<String> },
    CityId(u64),
    Zip { zip: String, country: String },
}

impl Location {
    /// Check caller-supplied values before anything touches the network.
    pub fn validate(&self) -> Result<(), Error> {
        match self {
            Location::Coords { lat, lon } => {
                if !(-90.0..=90.0).contains(lat) {
                    return Err(Error::validation(
                        "lat",
                        format!("latitude {lat} is outside [-90, 90]"),
                    ));
                }
                if !(-180.0..=180.0).contains(lon) {
                    return Err(Error::validation(
                        "lon",
                        format!("longitude {lon} is outside [-180, 180]"),
                    ));
                }
                Ok(())
            }
            Location::City { name, country } => {
                if name.trim().is_empty() {
                    return Err(Error::validation("name", "city name must not be empty"));
                }
                if let Some(country) = country
                    && country.trim().is_empty()
                {
                    return Err(Error::validation(
                        "country",
                        "country code must not be empty when given",
                    ));
                }
                Ok(())
            }
            Location::CityId(id) => {
                if *id == 0 {
                    return Err(Error::validation("id", "city id must be positive"));
                }
                Ok(())
            }
            Location::Zip { zip, country } => {
                if zip.trim().is_empty() {
                    return Err(Error::validation("zip", "zip code must not be empty"));
                }
                if country.trim().is_empty() {
                    return Err(Error::validation("country", "country code must not be empty"));
                }
                Ok(())
            }
        }
    }

    /// Identifier parameters for this query mode. The parameter set is data
    /// produced per mode so API evolution stays out of the client logic.
    pub fn query_params(&self) -> Vec<(String, String)> {
        match self {
            Location::Coords { lat, lon } => vec![
                ("lat".into(), lat.to_string()),
                ("lon".into(), lon.to_string()),
            ],
            Location::City { name, country } => {
                let q = match country {
                    Some(country) => format!("{name},{country}"),
                    None => name.clone(),
                };
                vec![("q".into(), q)]
            }
            Location::CityId(id) => vec![("id".into(), id.to_string())],
            Location::Zip { zip, country } => {
                vec![("zip".into(), format!("{zip},{country}"))]
            }
        }
    }
}

/// Per-call overrides; unset fields fall back to the client defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub units: Option<Units>,
    pub language: Option<String>,
}

impl RequestOptions {
    pub fn units(mut self, units: Units) -> Self {
        self.units = Some(units);
        self
    }

    pub fn language(mut self, lang: impl Into<String>) -> Self {
        self.language = Some(lang.into());
        self
    }
}
