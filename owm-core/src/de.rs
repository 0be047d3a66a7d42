//! Strict decoding of the `/weather` response body.
//!
//! The walk is explicit rather than a plain serde derive so that a missing
//! or mistyped field fails with its full dotted path (`main.temp`), which
//! is what callers need to report against a third-party payload. Unknown
//! extra keys are ignored for forward compatibility. Integer JSON values
//! are accepted for float fields; any other mismatch is an error.

use serde_json::{Map, Value};

use crate::error::Error;
use crate::model::{
    Clouds, Coord, CurrentWeather, MainMetrics, Precipitation, Sys, WeatherCondition, Wind,
};

/// Decode a raw response body into a typed [`CurrentWeather`].
pub fn current_weather_from_str(body: &str) -> Result<CurrentWeather, Error> {
    let root: Value =
        serde_json::from_str(body).map_err(|e| Error::parsing("$", e.to_string()))?;
    current_weather_from_value(&root)
}

/// Decode an already-parsed JSON value into a typed [`CurrentWeather`].
pub fn current_weather_from_value(root: &Value) -> Result<CurrentWeather, Error> {
    let obj = object(root, "$")?;

    let weather = array(require(obj, "weather", "")?, "weather")?
        .iter()
        .enumerate()
        .map(|(i, entry)| condition(entry, &format!("weather[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CurrentWeather {
        coord: coord(require(obj, "coord", "")?, "coord")?,
        weather,
        base: string(require(obj, "base", "")?, "base")?,
        main: main_metrics(require(obj, "main", "")?, "main")?,
        visibility: optional(obj, "visibility")
            .map(|v| uint::<u32>(v, "visibility"))
            .transpose()?,
        wind: wind(require(obj, "wind", "")?, "wind")?,
        clouds: clouds(require(obj, "clouds", "")?, "clouds")?,
        rain: optional(obj, "rain")
            .map(|v| precipitation(v, "rain"))
            .transpose()?,
        snow: optional(obj, "snow")
            .map(|v| precipitation(v, "snow"))
            .transpose()?,
        dt: int(require(obj, "dt", "")?, "dt")?,
        sys: sys(require(obj, "sys", "")?, "sys")?,
        timezone: uint_or_int::<i32>(require(obj, "timezone", "")?, "timezone")?,
        id: uint::<u64>(require(obj, "id", "")?, "id")?,
        name: string(require(obj, "name", "")?, "name")?,
        cod: uint::<u16>(require(obj, "cod", "")?, "cod")?,
    })
}

fn coord(v: &Value, path: &str) -> Result<Coord, Error> {
    let obj = object(v, path)?;
    Ok(Coord {
        lat: float(require(obj, "lat", path)?, &join(path, "lat"))?,
        lon: float(require(obj, "lon", path)?, &join(path, "lon"))?,
    })
}

fn condition(v: &Value, path: &str) -> Result<WeatherCondition, Error> {
    let obj = object(v, path)?;
    Ok(WeatherCondition {
        id: uint::<u32>(require(obj, "id", path)?, &join(path, "id"))?,
        main: string(require(obj, "main", path)?, &join(path, "main"))?,
        description: string(require(obj, "description", path)?, &join(path, "description"))?,
        icon: string(require(obj, "icon", path)?, &join(path, "icon"))?,
    })
}

fn main_metrics(v: &Value, path: &str) -> Result<MainMetrics, Error> {
    let obj = object(v, path)?;
    Ok(MainMetrics {
        temp: float(require(obj, "temp", path)?, &join(path, "temp"))?,
        feels_like: float(require(obj, "feels_like", path)?, &join(path, "feels_like"))?,
        temp_min: float(require(obj, "temp_min", path)?, &join(path, "temp_min"))?,
        temp_max: float(require(obj, "temp_max", path)?, &join(path, "temp_max"))?,
        pressure: uint::<u32>(require(obj, "pressure", path)?, &join(path, "pressure"))?,
        humidity: uint::<u8>(require(obj, "humidity", path)?, &join(path, "humidity"))?,
        sea_level: optional(obj, "sea_level")
            .map(|v| uint::<u32>(v, &join(path, "sea_level")))
            .transpose()?,
        grnd_level: optional(obj, "grnd_level")
            .map(|v| uint::<u32>(v, &join(path, "grnd_level")))
            .transpose()?,
    })
}

fn wind(v: &Value, path: &str) -> Result<Wind, Error> {
    let obj = object(v, path)?;
    Ok(Wind {
        speed: float(require(obj, "speed", path)?, &join(path, "speed"))?,
        deg: uint::<u16>(require(obj, "deg", path)?, &join(path, "deg"))?,
        gust: optional(obj, "gust")
            .map(|v| float(v, &join(path, "gust")))
            .transpose()?,
    })
}

fn clouds(v: &Value, path: &str) -> Result<Clouds, Error> {
    let obj = object(v, path)?;
    Ok(Clouds {
        all: uint::<u8>(require(obj, "all", path)?, &join(path, "all"))?,
    })
}

fn precipitation(v: &Value, path: &str) -> Result<Precipitation, Error> {
    let obj = object(v, path)?;
    Ok(Precipitation {
        one_hour: optional(obj, "1h")
            .map(|v| float(v, &join(path, "1h")))
            .transpose()?,
        three_hours: optional(obj, "3h")
            .map(|v| float(v, &join(path, "3h")))
            .transpose()?,
    })
}

fn sys(v: &Value, path: &str) -> Result<Sys, Error> {
    let obj = object(v, path)?;
    Ok(Sys {
        country: string(require(obj, "country", path)?, &join(path, "country"))?,
        sunrise: int(require(obj, "sunrise", path)?, &join(path, "sunrise"))?,
        sunset: int(require(obj, "sunset", path)?, &join(path, "sunset"))?,
    })
}

fn join(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn mismatch(path: &str, expected: &str, got: &Value) -> Error {
    Error::parsing(path, format!("expected {expected}, got {}", kind(got)))
}

fn object<'a>(v: &'a Value, path: &str) -> Result<&'a Map<String, Value>, Error> {
    v.as_object().ok_or_else(|| mismatch(path, "object", v))
}

fn array<'a>(v: &'a Value, path: &str) -> Result<&'a Vec<Value>, Error> {
    v.as_array().ok_or_else(|| mismatch(path, "array", v))
}

fn require<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
    parent: &str,
) -> Result<&'a Value, Error> {
    obj.get(key)
        .ok_or_else(|| Error::parsing(join(parent, key), "missing field"))
}

/// Absent and explicit-null keys both count as "not sent".
fn optional<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| !v.is_null())
}

fn string(v: &Value, path: &str) -> Result<String, Error> {
    v.as_str()
        .map(str::to_string)
        .ok_or_else(|| mismatch(path, "string", v))
}

fn float(v: &Value, path: &str) -> Result<f64, Error> {
    v.as_f64().ok_or_else(|| mismatch(path, "number", v))
}

fn int(v: &Value, path: &str) -> Result<i64, Error> {
    v.as_i64().ok_or_else(|| mismatch(path, "integer", v))
}

fn uint<T: TryFrom<u64>>(v: &Value, path: &str) -> Result<T, Error> {
    let raw = v.as_u64().ok_or_else(|| mismatch(path, "integer", v))?;
    T::try_from(raw).map_err(|_| Error::parsing(path, format!("value {raw} out of range")))
}

fn uint_or_int<T: TryFrom<i64>>(v: &Value, path: &str) -> Result<T, Error> {
    let raw = int(v, path)?;
    T::try_from(raw).map_err(|_| Error::parsing(path, format!("value {raw} out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONDON: &str = r#"{
        "coord": {"lon": -0.1257, "lat": 51.5085},
        "weather": [
            {"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"},
            {"id": 701, "main": "Mist", "description": "mist", "icon": "50d"}
        ],
        "base": "stations",
        "main": {
            "temp": 17.37,
            "feels_like": 16.92,
            "temp_min": 15.62,
            "temp_max": 18.91,
            "pressure": 1012,
            "humidity": 63,
            "sea_level": 1012,
            "grnd_level": 1008
        },
        "visibility": 10000,
        "wind": {"speed": 4.12, "deg": 250, "gust": 7.2},
        "clouds": {"all": 75},
        "rain": {"1h": 0.21},
        "dt": 1727000000,
        "sys": {"type": 2, "id": 2075535, "country": "GB", "sunrise": 1726980000, "sunset": 1727025000},
        "timezone": 3600,
        "id": 2643743,
        "name": "London",
        "cod": 200
    }"#;

    fn parsing_field(err: Error) -> String {
        match err {
            Error::Parsing { field, .. } => field,
            other => panic!("expected Parsing error, got {other:?}"),
        }
    }

    #[test]
    fn full_payload_round_trips_exactly() {
        let w = current_weather_from_str(LONDON).expect("well-formed payload");

        assert_eq!(w.coord.lat, 51.5085);
        assert_eq!(w.coord.lon, -0.1257);
        assert_eq!(w.main.temp, 17.37);
        assert_eq!(w.main.feels_like, 16.92);
        assert_eq!(w.main.pressure, 1012);
        assert_eq!(w.main.humidity, 63);
        assert_eq!(w.main.sea_level, Some(1012));
        assert_eq!(w.main.grnd_level, Some(1008));
        assert_eq!(w.wind.speed, 4.12);
        assert_eq!(w.wind.deg, 250);
        assert_eq!(w.wind.gust, Some(7.2));
        assert_eq!(w.clouds.all, 75);
        assert_eq!(w.visibility, Some(10_000));
        assert_eq!(w.rain.and_then(|r| r.one_hour), Some(0.21));
        assert_eq!(w.snow, None);
        assert_eq!(w.sys.country, "GB");
        assert_eq!(w.sys.sunrise, 1_726_980_000);
        assert_eq!(w.sys.sunset, 1_727_025_000);
        assert_eq!(w.name, "London");
        assert_eq!(w.id, 2_643_743);
        assert_eq!(w.timezone, 3600);
        assert_eq!(w.cod, 200);
    }

    #[test]
    fn condition_order_is_preserved() {
        let w = current_weather_from_str(LONDON).unwrap();
        let ids: Vec<u32> = w.weather.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![803, 701]);
        assert_eq!(w.weather[0].description, "broken clouds");
    }

    #[test]
    fn missing_nested_field_names_its_path() {
        let mut root: Value = serde_json::from_str(LONDON).unwrap();
        root["main"].as_object_mut().unwrap().remove("temp");

        let err = current_weather_from_value(&root).unwrap_err();
        assert_eq!(parsing_field(err), "main.temp");
    }

    #[test]
    fn missing_top_level_field_names_it() {
        let mut root: Value = serde_json::from_str(LONDON).unwrap();
        root.as_object_mut().unwrap().remove("wind");

        let err = current_weather_from_value(&root).unwrap_err();
        assert_eq!(parsing_field(err), "wind");
    }

    #[test]
    fn type_mismatch_is_an_error_not_a_coercion() {
        let mut root: Value = serde_json::from_str(LONDON).unwrap();
        root["main"]["temp"] = Value::String("17.4".into());

        let err = current_weather_from_value(&root).unwrap_err();
        match err {
            Error::Parsing { field, message } => {
                assert_eq!(field, "main.temp");
                assert!(message.contains("expected number"));
            }
            other => panic!("expected Parsing error, got {other:?}"),
        }
    }

    #[test]
    fn integer_values_fill_float_fields() {
        let mut root: Value = serde_json::from_str(LONDON).unwrap();
        root["main"]["temp"] = Value::from(17);

        let w = current_weather_from_value(&root).unwrap();
        assert_eq!(w.main.temp, 17.0);
    }

    #[test]
    fn unknown_extra_keys_are_ignored() {
        let mut root: Value = serde_json::from_str(LONDON).unwrap();
        root["future_field"] = Value::from("anything");
        root["main"]["future_metric"] = Value::from(1.0);

        assert!(current_weather_from_value(&root).is_ok());
    }

    #[test]
    fn bad_condition_entry_names_its_index() {
        let mut root: Value = serde_json::from_str(LONDON).unwrap();
        root["weather"][1].as_object_mut().unwrap().remove("icon");

        let err = current_weather_from_value(&root).unwrap_err();
        assert_eq!(parsing_field(err), "weather[1].icon");
    }

    #[test]
    fn out_of_range_integer_is_an_error() {
        let mut root: Value = serde_json::from_str(LONDON).unwrap();
        root["main"]["humidity"] = Value::from(300);

        let err = current_weather_from_value(&root).unwrap_err();
        assert_eq!(parsing_field(err), "main.humidity");
    }

    #[test]
    fn malformed_body_is_a_parsing_error() {
        let err = current_weather_from_str("{not json").unwrap_err();
        assert!(matches!(err, Error::Parsing { .. }));
    }
}
