use std::time::Duration;

use url::Url;

use crate::error::Result as EResult;
use crate::fetch::{Fetcher, HttpFetcher};
use crate::query::Query;
use crate::response::{decode, CurrentWeather, DailyForecast, Response};
use crate::sources::{Endpoint, DEFAULT_BASE_URL};
use crate::url_builder::{format_url, parse_base_url};

#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Service root; any `http(s)` URL, path prefix allowed.
    pub base_url: String,
    pub user_agent: String,
    /// Whole-request timeout for the HTTP transport. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub verify_tls: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("openweather-query-rs/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Some(Duration::from_secs(30)),
            verify_tls: true,
        }
    }
}

/// Builds request URLs, fetches them and optionally decodes the payload.
///
/// Holds no per-request state, so one client can serve any number of
/// queries, including from several threads when the fetcher allows it.
#[derive(Debug, Clone)]
pub struct Client<F = HttpFetcher> {
    opts: ClientOptions,
    base_url: Url,
    fetcher: F,
}

impl Client<HttpFetcher> {
    pub fn new(opts: ClientOptions) -> EResult<Self> {
        let fetcher = HttpFetcher::new(&opts.user_agent, opts.timeout, opts.verify_tls)?;
        Self::with_fetcher(opts, fetcher)
    }

    /// Client for the public service with default options.
    pub fn default_client() -> EResult<Self> {
        Self::new(ClientOptions::default())
    }
}

impl<F: Fetcher> Client<F> {
    /// Use a custom transport. `user_agent`, `timeout` and `verify_tls` are
    /// then the fetcher's business and ignored here.
    pub fn with_fetcher(opts: ClientOptions, fetcher: F) -> EResult<Self> {
        let base_url = parse_base_url(&opts.base_url)?;
        Ok(Self {
            opts,
            base_url,
            fetcher,
        })
    }

    pub fn options(&self) -> &ClientOptions {
        &self.opts
    }

    pub fn url_for(&self, endpoint: Endpoint, query: &Query) -> String {
        format_url(&self.base_url, endpoint, query)
    }

    /// Fetch `endpoint` and return the body as text without parsing it.
    pub fn fetch_raw(&self, query: &Query, endpoint: Endpoint) -> EResult<String> {
        let body = self.fetch_bytes(query, endpoint)?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    /// Fetch the endpoint belonging to `T` and decode the payload.
    pub fn fetch<T: Response>(&self, query: &Query) -> EResult<T> {
        let body = self.fetch_bytes(query, T::ENDPOINT)?;
        decode(&body)
    }

    pub fn weather_raw(&self, query: &Query) -> EResult<String> {
        self.fetch_raw(query, Endpoint::CurrentWeather)
    }

    pub fn weather(&self, query: &Query) -> EResult<CurrentWeather> {
        self.fetch(query)
    }

    pub fn daily_forecast_raw(&self, query: &Query) -> EResult<String> {
        self.fetch_raw(query, Endpoint::DailyForecast)
    }

    pub fn daily_forecast(&self, query: &Query) -> EResult<DailyForecast> {
        self.fetch(query)
    }

    fn fetch_bytes(&self, query: &Query, endpoint: Endpoint) -> EResult<Vec<u8>> {
        let url = self.url_for(endpoint, query);
        // The URL carries the API key; log only what identifies the request.
        tracing::debug!(
            %endpoint,
            location = query.location().kind(),
            units = query.unit(),
            "requesting weather data"
        );
        self.fetcher.fetch(&url)
    }
}
