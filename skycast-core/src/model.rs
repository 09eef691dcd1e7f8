use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A validated place-name query: trimmed and guaranteed non-empty.
///
/// Empty or whitespace-only input never becomes a `Query`, so it can
/// never reach the network path. Callers treat `None` as "nothing to
/// do", not as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_owned()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Output of the geocoding step. Ephemeral: consumed immediately by the
/// forecast step, never exposed on its own.
#[derive(Debug, Clone)]
pub struct GeoResult {
    pub latitude: f64,
    pub longitude: f64,
    pub resolved_name: String,
    pub region: Option<String>,
    pub country_code: String,
}

/// Terminal output of a successful lookup. Only ever constructed from a
/// successful pair of API responses; partial results are never exposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub city: String,
    pub region: Option<String>,
    pub country: String,
    /// Current temperature, rounded to the nearest whole degree.
    pub temperature_c: i32,
    /// Raw WMO weather code as reported by the forecast endpoint.
    pub weather_code: i32,
    /// Observation time reported by the forecast endpoint, when present.
    /// Local wall time at the location (the endpoint resolves the
    /// timezone server-side).
    pub observed_at: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_trims_surrounding_whitespace() {
        let q = Query::new("  sao paulo  ").expect("non-empty after trim");
        assert_eq!(q.as_str(), "sao paulo");
    }

    #[test]
    fn query_rejects_empty_input() {
        assert!(Query::new("").is_none());
        assert!(Query::new("   ").is_none());
        assert!(Query::new("\t\n").is_none());
    }

    #[test]
    fn query_keeps_interior_whitespace() {
        let q = Query::new("New York").expect("valid");
        assert_eq!(q.as_str(), "New York");
        assert_eq!(q.to_string(), "New York");
    }
}
