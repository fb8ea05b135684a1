#![forbid(unsafe_code)]

//! Rust client for the OpenWeatherMap current weather and daily forecast APIs.
//!
//! A [`Query`] names a place (city name, postal code, city id or a
//! latitude/longitude pair), carries the API key and a unit system, and is
//! turned into a request URL for one of the two service [`Endpoint`]s. The
//! [`Client`] fetches that URL and either hands back the body untouched (raw
//! mode) or decodes it into [`CurrentWeather`] / [`DailyForecast`].
//!
//! **Quick start**
//! ```no_run
//! use openweather_query::{Client, Query};
//!
//! let client = Client::default_client()?;
//!
//! let query = Query::for_city("my-api-key", "Berlin,de");
//! let weather = client.weather(&query)?;
//! println!("{}: {} °C", weather.name, weather.main.temp);
//!
//! let forecast = client.daily_forecast(&query.with_unit("imperial"))?;
//! for day in &forecast.entries {
//!     println!("{:?}: {} °F", day.date(), day.temp.max);
//! }
//! # Ok::<(), openweather_query::Error>(())
//! ```
//!
//! **Raw mode and custom transports**
//! ```no_run
//! use openweather_query::{Client, ClientOptions, Endpoint, Query};
//!
//! let opts = ClientOptions {
//!     base_url: "http://localhost:8080/owm".to_string(),
//!     ..ClientOptions::default()
//! };
//! let client = Client::new(opts)?;
//! let json = client.fetch_raw(&Query::for_coordinates("key", "51", "13"), Endpoint::CurrentWeather)?;
//! println!("{json}");
//! # Ok::<(), openweather_query::Error>(())
//! ```
//!
//! Notes:
//! - Nothing is validated locally: API key, coordinates and unit strings are
//!   forwarded as given and rejected, if at all, by the service.
//! - Query values are form-urlencoded, so `Berlin,de` goes out as `Berlin%2Cde`.
//! - The library logs through `tracing` at debug/trace level and never logs the API key.

mod client;
mod error;
mod fetch;
mod query;
mod response;
mod sources;
mod url_builder;

pub use crate::client::{Client, ClientOptions};
pub use crate::error::{Error, Result};
pub use crate::fetch::{Fetcher, HttpFetcher};
pub use crate::query::{Location, Query, DEFAULT_UNIT, UNIT_IMPERIAL, UNIT_METRIC, UNIT_STANDARD};
pub use crate::response::{
    decode, City, Clouds, Condition, Coordinate, CurrentWeather, DailyForecast, DayTemperatures,
    ForecastEntry, Measurements, Precipitation, Response, System, Wind,
};
pub use crate::sources::{icon_url, Endpoint, DEFAULT_BASE_URL};
pub use crate::url_builder::format_url;
