/// Unit system used when a query does not name one.
pub const DEFAULT_UNIT: &str = UNIT_METRIC;

pub const UNIT_METRIC: &str = "metric";
pub const UNIT_IMPERIAL: &str = "imperial";
pub const UNIT_STANDARD: &str = "standard";

/// The means by which a place is identified to the service.
///
/// Values are kept exactly as supplied; nothing is parsed or validated
/// locally, so a bad zip code or a non-numeric latitude only shows up as the
/// service's own error response.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Location {
    /// Free-text city name, optionally `"City,CountryCode"`.
    City(String),
    /// Postal code in whatever format the service accepts (e.g. `"10115,de"`).
    Zip(String),
    /// Service-assigned numeric city id.
    CityId(String),
    /// Decimal degrees.
    Coordinates { lat: String, lon: String },
}

impl Location {
    pub fn kind(&self) -> &'static str {
        match self {
            Location::City(_) => "city",
            Location::Zip(_) => "zip",
            Location::CityId(_) => "id",
            Location::Coordinates { .. } => "coordinates",
        }
    }

    /// Query-string pairs naming this location, in emission order.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        match self {
            Location::City(name) => vec![("q", name.as_str())],
            Location::Zip(code) => vec![("zip", code.as_str())],
            Location::CityId(id) => vec![("id", id.as_str())],
            Location::Coordinates { lat, lon } => vec![("lat", lat.as_str()), ("lon", lon.as_str())],
        }
    }
}

/// A pending request: location, API key and unit system.
///
/// Immutable once built; `with_unit` hands back a new value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query {
    api_key: String,
    location: Location,
    unit: String,
}

impl Query {
    pub fn new(api_key: impl Into<String>, location: Location) -> Self {
        Self {
            api_key: api_key.into(),
            location,
            unit: DEFAULT_UNIT.to_string(),
        }
    }

    /// Query by city name, e.g. `"Berlin"` or `"Berlin,de"`.
    pub fn for_city(api_key: impl Into<String>, city: impl Into<String>) -> Self {
        Self::new(api_key, Location::City(city.into()))
    }

    pub fn for_zip(api_key: impl Into<String>, zip: impl Into<String>) -> Self {
        Self::new(api_key, Location::Zip(zip.into()))
    }

    pub fn for_id(api_key: impl Into<String>, id: impl Into<String>) -> Self {
        Self::new(api_key, Location::CityId(id.into()))
    }

    pub fn for_coordinates(
        api_key: impl Into<String>,
        lat: impl Into<String>,
        lon: impl Into<String>,
    ) -> Self {
        Self::new(
            api_key,
            Location::Coordinates {
                lat: lat.into(),
                lon: lon.into(),
            },
        )
    }

    /// Replace the unit system. The value is passed to the service verbatim.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_default_to_metric() {
        let q = Query::for_city("testKey", "Berlin,de");
        assert_eq!(q.api_key(), "testKey");
        assert_eq!(q.location(), &Location::City("Berlin,de".to_string()));
        assert_eq!(q.unit(), "metric");

        assert_eq!(Query::for_zip("k", "10115,de").unit(), DEFAULT_UNIT);
        assert_eq!(Query::for_id("k", "2950159").unit(), DEFAULT_UNIT);
        assert_eq!(Query::for_coordinates("k", "51", "13").unit(), DEFAULT_UNIT);
    }

    #[test]
    fn with_unit_overrides_without_touching_location() {
        let q = Query::for_city("testKey", "Berlin,de").with_unit(UNIT_IMPERIAL);
        assert_eq!(q.unit(), "imperial");
        assert_eq!(q.location(), &Location::City("Berlin,de".to_string()));
    }

    #[test]
    fn unit_is_not_validated() {
        let q = Query::for_id("k", "1").with_unit("kelvin-ish");
        assert_eq!(q.unit(), "kelvin-ish");
    }

    #[test]
    fn coordinates_keep_both_values_apart() {
        let q = Query::for_coordinates("k", "52.52", "13.405");
        assert_eq!(
            q.location().query_pairs(),
            vec![("lat", "52.52"), ("lon", "13.405")]
        );
    }

    #[test]
    fn coordinates_may_contain_any_character() {
        let q = Query::for_coordinates("k", "1|2", "3");
        assert_eq!(q.location().query_pairs(), vec![("lat", "1|2"), ("lon", "3")]);
    }

    #[test]
    fn each_location_emits_its_own_parameter() {
        assert_eq!(Location::City("a".into()).query_pairs(), vec![("q", "a")]);
        assert_eq!(Location::Zip("b".into()).query_pairs(), vec![("zip", "b")]);
        assert_eq!(Location::CityId("c".into()).query_pairs(), vec![("id", "c")]);
    }

    #[test]
    fn kind_names_the_variant() {
        assert_eq!(Query::for_zip("k", "1").location().kind(), "zip");
        assert_eq!(Query::for_coordinates("k", "1", "2").location().kind(), "coordinates");
    }
}
