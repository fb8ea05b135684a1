use url::Url;

use crate::error::{Error, Result};
use crate::query::Query;
use crate::sources::{is_http_url, Endpoint};

/// Validate and parse a configured base URL.
pub fn parse_base_url(base_url: &str) -> Result<Url> {
    if !is_http_url(base_url) {
        return Err(Error::InvalidOptions(format!(
            "base url must be http(s), got {base_url}"
        )));
    }
    Ok(Url::parse(base_url)?)
}

/// Build the request URL for `endpoint`.
///
/// Parameter order is fixed: the location parameter(s), then `appid`, then
/// `units`. Values are form-urlencoded, so `&`, `#`, `,` and non-ASCII city
/// names cannot break the query string; digits, letters, `.` and `-` are
/// emitted unchanged.
pub fn format_url(base_url: &Url, endpoint: Endpoint, query: &Query) -> String {
    let mut url = base_url.clone();
    let path = format!("{}{}", base_url.path().trim_end_matches('/'), endpoint.path());
    url.set_path(&path);
    url.set_fragment(None);

    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (key, value) in query.location().query_pairs() {
            pairs.append_pair(key, value);
        }
        pairs.append_pair("appid", query.api_key());
        pairs.append_pair("units", query.unit());
    }

    url.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::DEFAULT_BASE_URL;

    fn base() -> Url {
        parse_base_url(DEFAULT_BASE_URL).unwrap()
    }

    fn query_string(url: &str) -> &str {
        url.split_once('?').map(|(_, q)| q).unwrap_or("")
    }

    #[test]
    fn city_query_for_current_weather() {
        let q = Query::for_city("KEY", "Berlin");
        assert_eq!(
            format_url(&base(), Endpoint::CurrentWeather, &q),
            "https://api.openweathermap.org/data/2.5/weather?q=Berlin&appid=KEY&units=metric"
        );
    }

    #[test]
    fn id_query_for_daily_forecast() {
        let q = Query::for_id("KEY", "2950159");
        assert_eq!(
            format_url(&base(), Endpoint::DailyForecast, &q),
            "https://api.openweathermap.org/data/2.5/forecast/daily?id=2950159&appid=KEY&units=metric"
        );
    }

    #[test]
    fn coordinates_emit_lat_before_lon() {
        let q = Query::for_coordinates("KEY", "51", "13");
        let url = format_url(&base(), Endpoint::CurrentWeather, &q);
        assert!(url.contains("?lat=51&lon=13&appid=KEY"), "{url}");
    }

    #[test]
    fn every_variant_emits_one_location_and_one_appid_and_units() {
        let queries = [
            (Query::for_city("K", "Berlin"), vec!["q"]),
            (Query::for_zip("K", "10115"), vec!["zip"]),
            (Query::for_id("K", "2950159"), vec!["id"]),
            (Query::for_coordinates("K", "51.5", "-0.12"), vec!["lat", "lon"]),
        ];

        for (q, expected_location) in queries {
            let url = format_url(&base(), Endpoint::CurrentWeather, &q);
            let keys: Vec<&str> = query_string(&url)
                .split('&')
                .map(|pair| pair.split_once('=').map(|(k, _)| k).unwrap_or(pair))
                .collect();

            let mut expected = expected_location.clone();
            expected.extend(["appid", "units"]);
            assert_eq!(keys, expected, "{url}");
        }
    }

    #[test]
    fn unit_default_and_override() {
        let q = Query::for_zip("K", "10115,de");
        assert!(format_url(&base(), Endpoint::CurrentWeather, &q).ends_with("&units=metric"));

        let q = q.with_unit("imperial");
        assert!(format_url(&base(), Endpoint::CurrentWeather, &q).ends_with("&units=imperial"));
    }

    #[test]
    fn reserved_and_non_ascii_values_are_escaped() {
        let q = Query::for_city("K", "Berlin,de");
        assert!(format_url(&base(), Endpoint::CurrentWeather, &q).contains("?q=Berlin%2Cde&"));

        let q = Query::for_city("K", "A&B#c");
        let url = format_url(&base(), Endpoint::CurrentWeather, &q);
        assert!(url.contains("?q=A%26B%23c&appid=K&units=metric"), "{url}");

        let q = Query::for_city("K", "München");
        assert!(format_url(&base(), Endpoint::CurrentWeather, &q).contains("?q=M%C3%BCnchen&"));

        let q = Query::for_city("K", "New York");
        assert!(format_url(&base(), Endpoint::CurrentWeather, &q).contains("?q=New+York&"));
    }

    #[test]
    fn base_path_prefix_is_kept() {
        let base = parse_base_url("http://127.0.0.1:8080/mirror/").unwrap();
        let q = Query::for_city("K", "Berlin");
        assert_eq!(
            format_url(&base, Endpoint::DailyForecast, &q),
            "http://127.0.0.1:8080/mirror/data/2.5/forecast/daily?q=Berlin&appid=K&units=metric"
        );
    }

    #[test]
    fn base_url_must_be_http() {
        assert!(matches!(
            parse_base_url("ftp://example.org"),
            Err(Error::InvalidOptions(_))
        ));
        assert!(matches!(parse_base_url("http://"), Err(Error::Url(_))));
    }
}
