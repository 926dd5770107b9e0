//! Query-string routing.
//!
//! The application's navigation contract is carried entirely by a query
//! string: `city={name}`, `latitude={lat}&longitude={lon}`, or empty for the
//! home screen. `QueryState` is recomputed from the current query on every
//! navigation and never persisted.

use url::form_urlencoded;

/// Read-only view of the recognized query parameters.
///
/// Values are kept as strings: coordinates are forwarded to the provider
/// verbatim, exactly as they appeared in the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub city: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

impl QueryState {
    /// Parse a query string. Unrecognized parameters are ignored, empty
    /// values count as absent. A leading `/?` or `?` is tolerated so full
    /// navigation targets parse as-is.
    pub fn parse(query: &str) -> Self {
        let query = query
            .strip_prefix("/?")
            .or_else(|| query.strip_prefix('?'))
            .unwrap_or(query);

        let mut state = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let value = (!value.is_empty()).then(|| value.into_owned());
            match key.as_ref() {
                "city" => state.city = value,
                "latitude" => state.latitude = value,
                "longitude" => state.longitude = value,
                _ => {}
            }
        }
        state
    }
}

/// The three screens the application can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Home,
    CityResult { city: String },
    CoordResult { latitude: String, longitude: String },
}

/// Pure screen selection from the current query state. A city parameter wins
/// over coordinates when both are present.
pub fn select_screen(query: &QueryState) -> Screen {
    if let Some(city) = &query.city {
        return Screen::CityResult { city: city.clone() };
    }
    if let (Some(latitude), Some(longitude)) = (&query.latitude, &query.longitude) {
        return Screen::CoordResult {
            latitude: latitude.clone(),
            longitude: longitude.clone(),
        };
    }
    Screen::Home
}

/// Navigation target for a city search.
pub fn city_query(city: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("city", city)
        .finish()
}

/// Navigation target for a coordinate lookup.
pub fn coords_query(latitude: &str, longitude: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("latitude", latitude)
        .append_pair("longitude", longitude)
        .finish()
}

/// Navigation target for the home screen.
pub fn home_query() -> String {
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_query_selects_city_result() {
        let state = QueryState::parse("city=London");
        assert_eq!(state.city.as_deref(), Some("London"));
        assert_eq!(select_screen(&state), Screen::CityResult { city: "London".into() });
    }

    #[test]
    fn coordinate_query_selects_coord_result() {
        let state = QueryState::parse("latitude=51.5&longitude=-0.12");
        assert_eq!(
            select_screen(&state),
            Screen::CoordResult { latitude: "51.5".into(), longitude: "-0.12".into() }
        );
    }

    #[test]
    fn city_takes_priority_over_coordinates() {
        let state = QueryState::parse("city=Oslo&latitude=59.9&longitude=10.7");
        assert_eq!(select_screen(&state), Screen::CityResult { city: "Oslo".into() });
    }

    #[test]
    fn empty_query_is_home() {
        assert_eq!(select_screen(&QueryState::parse("")), Screen::Home);
    }

    #[test]
    fn lone_latitude_is_home() {
        let state = QueryState::parse("latitude=51.5");
        assert_eq!(select_screen(&state), Screen::Home);
    }

    #[test]
    fn empty_value_counts_as_absent() {
        let state = QueryState::parse("city=");
        assert_eq!(state.city, None);
        assert_eq!(select_screen(&state), Screen::Home);
    }

    #[test]
    fn unrecognized_parameters_are_ignored() {
        let state = QueryState::parse("city=Paris&utm_source=mail&lang=fr");
        assert_eq!(state, QueryState { city: Some("Paris".into()), ..Default::default() });
    }

    #[test]
    fn percent_encoded_city_decodes() {
        let state = QueryState::parse("city=New%20York");
        assert_eq!(state.city.as_deref(), Some("New York"));
    }

    #[test]
    fn leading_prefix_is_tolerated() {
        assert_eq!(QueryState::parse("/?city=London"), QueryState::parse("city=London"));
        assert_eq!(QueryState::parse("?city=London"), QueryState::parse("city=London"));
    }

    #[test]
    fn navigation_builders_round_trip() {
        let q = city_query("New York");
        assert_eq!(QueryState::parse(&q).city.as_deref(), Some("New York"));

        let q = coords_query("51.5", "-0.12");
        let state = QueryState::parse(&q);
        assert_eq!(state.latitude.as_deref(), Some("51.5"));
        assert_eq!(state.longitude.as_deref(), Some("-0.12"));

        assert_eq!(select_screen(&QueryState::parse(&home_query())), Screen::Home);
    }
}
