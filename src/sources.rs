use std::fmt;

/// Public OpenWeatherMap API host.
///
/// Any other `http(s)` URL may be configured instead; its path is kept as a prefix.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

const ICON_BASE_URL: &str = "http://openweathermap.org/img/w";

/// Which fixed service path a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    CurrentWeather,
    DailyForecast,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::CurrentWeather => "/data/2.5/weather",
            Endpoint::DailyForecast => "/data/2.5/forecast/daily",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::CurrentWeather => "weather",
            Endpoint::DailyForecast => "forecast/daily",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn is_http_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Image URL for a condition icon code such as `"10d"`.
pub fn icon_url(icon: &str) -> String {
    format!("{ICON_BASE_URL}/{icon}.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_have_distinct_paths() {
        assert_eq!(Endpoint::CurrentWeather.path(), "/data/2.5/weather");
        assert_eq!(Endpoint::DailyForecast.path(), "/data/2.5/forecast/daily");
    }

    #[test]
    fn icon_url_template() {
        assert_eq!(icon_url("10d"), "http://openweathermap.org/img/w/10d.png");
    }

    #[test]
    fn http_url_detection() {
        assert!(is_http_url("https://api.openweathermap.org"));
        assert!(is_http_url("http://127.0.0.1:8080"));
        assert!(!is_http_url("ftp://example.org"));
    }
}
