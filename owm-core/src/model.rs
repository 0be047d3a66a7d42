use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geographic coordinates of the reported location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

/// One weather condition entry. The API returns a list of these, the first
/// being the primary condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherCondition {
    /// Condition id, e.g. 803.
    pub id: u32,
    /// Parameter group: "Rain", "Snow", "Clouds", ...
    pub main: String,
    /// Human-readable description, e.g. "scattered clouds".
    pub description: String,
    /// Icon id, e.g. "04d".
    pub icon: String,
}

/// Main temperature and atmosphere metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainMetrics {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    /// Atmospheric pressure, hPa.
    pub pressure: u32,
    /// Humidity, percent.
    pub humidity: u8,
    /// Pressure at sea level, hPa.
    pub sea_level: Option<u32>,
    /// Pressure at ground level, hPa.
    pub grnd_level: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
    /// Direction in meteorological degrees.
    pub deg: u16,
    pub gust: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Clouds {
    /// Cloudiness, percent.
    pub all: u8,
}

/// Rain or snow volume. Buckets are absent when there was no precipitation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Precipitation {
    /// Volume for the last hour, mm.
    #[serde(rename = "1h")]
    pub one_hour: Option<f64>,
    /// Volume for the last three hours, mm.
    #[serde(rename = "3h")]
    pub three_hours: Option<f64>,
}

/// Country and sun times for the reported location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sys {
    /// ISO country code, e.g. "GB".
    pub country: String,
    /// Sunrise, unix UTC.
    pub sunrise: i64,
    /// Sunset, unix UTC.
    pub sunset: i64,
}

impl Sys {
    pub fn sunrise_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.sunrise, 0)
    }

    pub fn sunset_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.sunset, 0)
    }
}

/// Current weather for one location, as returned by the `/weather` endpoint.
///
/// Built fresh per call; nothing is shared or cached between responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub coord: Coord,
    /// Condition entries, in API order.
    pub weather: Vec<WeatherCondition>,
    pub base: String,
    pub main: MainMetrics,
    /// Visibility in metres, capped at 10 km by the API.
    pub visibility: Option<u32>,
    pub wind: Wind,
    pub clouds: Clouds,
    pub rain: Option<Precipitation>,
    pub snow: Option<Precipitation>,
    /// Time of data calculation, unix UTC.
    pub dt: i64,
    pub sys: Sys,
    /// Shift in seconds from UTC.
    pub timezone: i32,
    /// City id.
    pub id: u64,
    /// City name.
    pub name: String,
    /// Internal response code.
    pub cod: u16,
}

impl CurrentWeather {
    pub fn observation_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.dt, 0)
    }

    /// Primary condition description, if the API sent any.
    pub fn condition(&self) -> Option<&WeatherCondition> {
        self.weather.first()
    }
}

impl std::fmt::Display for CurrentWeather {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}: {}°", self.name, self.sys.country, self.main.temp)?;
        if let Some(cond) = self.condition() {
            write!(f, ", {}", cond.description)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CurrentWeather {
        CurrentWeather {
            coord: Coord { lat: 51.51, lon: -0.13 },
            weather: vec![WeatherCondition {
                id: 803,
                main: "Clouds".into(),
                description: "broken clouds".into(),
                icon: "04d".into(),
            }],
            base: "stations".into(),
            main: MainMetrics {
                temp: 17.4,
                feels_like: 16.9,
                temp_min: 15.6,
                temp_max: 18.9,
                pressure: 1012,
                humidity: 63,
                sea_level: None,
                grnd_level: None,
            },
            visibility: Some(10_000),
            wind: Wind { speed: 4.1, deg: 250, gust: None },
            clouds: Clouds { all: 75 },
            rain: None,
            snow: None,
            dt: 1_727_000_000,
            sys: Sys {
                country: "GB".into(),
                sunrise: 1_726_980_000,
                sunset: 1_727_025_000,
            },
            timezone: 3600,
            id: 2_643_743,
            name: "London".into(),
            cod: 200,
        }
    }

    #[test]
    fn display_includes_name_country_and_condition() {
        let s = sample().to_string();
        assert!(s.starts_with("London, GB: 17.4°"));
        assert!(s.contains("broken clouds"));
    }

    #[test]
    fn timestamps_convert_to_utc() {
        let w = sample();
        let sunrise = w.sys.sunrise_time().expect("valid timestamp");
        assert_eq!(sunrise.timestamp(), w.sys.sunrise);
        let observed = w.observation_time().expect("valid timestamp");
        assert_eq!(observed.timestamp(), w.dt);
    }

    #[test]
    fn condition_is_the_first_entry() {
        let w = sample();
        assert_eq!(w.condition().map(|c| c.id), Some(803));
    }
}
