//! Typed payloads for the two service endpoints.
//!
//! Field names follow Rust conventions; the JSON keys are the service's own
//! (`temp_min`, `3h`, `geoname_id`, ...). Unknown keys are ignored so newer
//! payloads keep decoding. Only the fields wrapped in `Option` may be absent.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sources::{icon_url, Endpoint};

/// A payload shape tied to the endpoint that produces it.
pub trait Response: DeserializeOwned {
    const ENDPOINT: Endpoint;
}

/// Decode raw response bytes into `T`.
///
/// Purely structural: no cross-field checks are made (see
/// [`DailyForecast::count_matches_entries`]).
pub fn decode<T: Response>(bytes: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(bytes)?)
}

fn timestamp_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

/// One reported weather condition; the service may list several at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub id: i64,
    pub main: String,
    pub description: String,
    pub icon: String,
}

impl Condition {
    pub fn icon_url(&self) -> String {
        icon_url(&self.icon)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    pub temp: f64,
    pub pressure: f64,
    pub humidity: u32,
    pub temp_min: f64,
    pub temp_max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
    #[serde(rename = "deg")]
    pub degree: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clouds {
    #[serde(rename = "all")]
    pub coverage_percent: u32,
}

/// Rain or snow volume in mm over the last one or three hours.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Precipitation {
    #[serde(rename = "1h", default, skip_serializing_if = "Option::is_none")]
    pub one_hour_volume: Option<f64>,
    #[serde(rename = "3h", default, skip_serializing_if = "Option::is_none")]
    pub three_hour_volume: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct System {
    #[serde(rename = "type", default)]
    pub kind: Option<i64>,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub message: Option<f64>,
    pub country: String,
    pub sunrise: i64,
    pub sunset: i64,
}

impl System {
    pub fn sunrise_at(&self) -> Option<DateTime<Utc>> {
        timestamp_to_utc(self.sunrise)
    }

    pub fn sunset_at(&self) -> Option<DateTime<Utc>> {
        timestamp_to_utc(self.sunset)
    }
}

/// Payload of the current weather endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    #[serde(rename = "coord")]
    pub coordinate: Coordinate,
    #[serde(rename = "weather")]
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub base: String,
    pub main: Measurements,
    pub wind: Wind,
    pub clouds: Clouds,
    #[serde(rename = "rain", default, skip_serializing_if = "Option::is_none")]
    pub precipitation: Option<Precipitation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snow: Option<Precipitation>,
    #[serde(rename = "dt")]
    pub timestamp: i64,
    #[serde(rename = "sys")]
    pub system: System,
    pub id: i64,
    /// The service's resolution of the requested location, not the input string.
    pub name: String,
    #[serde(rename = "cod")]
    pub status_code: i64,
}

impl CurrentWeather {
    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        timestamp_to_utc(self.timestamp)
    }
}

impl Response for CurrentWeather {
    const ENDPOINT: Endpoint = Endpoint::CurrentWeather;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub geoname_id: i64,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub country: String,
    #[serde(rename = "iso2")]
    pub iso_code: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub population: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayTemperatures {
    pub day: f64,
    pub min: f64,
    pub max: f64,
    pub night: f64,
    pub eve: f64,
    pub morn: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    #[serde(rename = "dt")]
    pub timestamp: i64,
    pub temp: DayTemperatures,
    pub pressure: f64,
    pub humidity: u32,
    #[serde(rename = "weather")]
    pub conditions: Vec<Condition>,
    #[serde(rename = "speed")]
    pub wind_speed: f64,
    #[serde(rename = "deg")]
    pub wind_degree: f64,
    #[serde(rename = "clouds")]
    pub clouds_percent: u32,
    #[serde(rename = "snow", default, skip_serializing_if = "Option::is_none")]
    pub snow_volume: Option<f64>,
    #[serde(rename = "rain", default, skip_serializing_if = "Option::is_none")]
    pub rain_volume: Option<f64>,
}

impl ForecastEntry {
    pub fn date(&self) -> Option<DateTime<Utc>> {
        timestamp_to_utc(self.timestamp)
    }
}

/// Payload of the daily forecast endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    #[serde(rename = "cod")]
    pub status_code: String,
    pub message: f64,
    pub city: City,
    #[serde(rename = "cnt")]
    pub count: i64,
    #[serde(rename = "list")]
    pub entries: Vec<ForecastEntry>,
}

impl DailyForecast {
    /// Whether the service-reported `count` agrees with the number of entries.
    pub fn count_matches_entries(&self) -> bool {
        usize::try_from(self.count).is_ok_and(|n| n == self.entries.len())
    }
}

impl Response for DailyForecast {
    const ENDPOINT: Endpoint = Endpoint::DailyForecast;
}
