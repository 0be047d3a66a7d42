use clap::{Parser, Subcommand};
use owm_core::{CurrentWeather, Location, OwmClient, RequestOptions, Units};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "owm", version, about = "OpenWeatherMap current weather")]
pub struct Cli {
    /// API key; falls back to the OPENWEATHERMAP_API_KEY environment variable.
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Measurement system: standard, metric or imperial.
    #[arg(long, global = true)]
    pub units: Option<String>,

    /// Description language code, e.g. "de".
    #[arg(long, global = true)]
    pub lang: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up by geographic coordinates.
    Coords { lat: f64, lon: f64 },

    /// Look up by city name, optionally narrowed by country code.
    City {
        name: String,

        #[arg(long)]
        country: Option<String>,
    },

    /// Look up by OpenWeatherMap city id.
    CityId { id: u64 },

    /// Look up by zip/postal code and country code.
    Zip { zip: String, country: String },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let client = OwmClient::new(self.api_key.as_deref())?;

        let mut options = RequestOptions::default();
        if let Some(units) = self.units.as_deref() {
            options.units = Some(Units::try_from(units)?);
        }
        if let Some(lang) = self.lang {
            options.language = Some(lang);
        }

        let location = match self.command {
            Command::Coords { lat, lon } => Location::Coords { lat, lon },
            Command::City { name, country } => Location::City { name, country },
            Command::CityId { id } => Location::CityId(id),
            Command::Zip { zip, country } => Location::Zip { zip, country },
        };

        let weather = client.current_weather_with(location, &options).await?;
        print_report(&weather);

        Ok(())
    }
}

fn print_report(weather: &CurrentWeather) {
    println!("{weather}");
    println!();
    println!("Location:    {}, {}", weather.name, weather.sys.country);
    println!(
        "Temperature: {}° (feels like {}°)",
        weather.main.temp, weather.main.feels_like
    );
    if let Some(cond) = weather.condition() {
        println!("Condition:   {}", cond.description);
    }
    println!("Humidity:    {}%", weather.main.humidity);
    println!("Wind:        {} m/s, {}°", weather.wind.speed, weather.wind.deg);
    println!("Cloudiness:  {}%", weather.clouds.all);
    if let Some(rain) = weather.rain
        && let Some(mm) = rain.one_hour
    {
        println!("Rain:        {mm}mm (1h)");
    }
    if let (Some(sunrise), Some(sunset)) =
        (weather.sys.sunrise_time(), weather.sys.sunset_time())
    {
        println!(
            "Sun:         rise {}, set {} (UTC)",
            sunrise.format("%H:%M"),
            sunset.format("%H:%M")
        );
    }
}
