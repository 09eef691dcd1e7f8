use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Deserialize;

use async_trait::async_trait;

use crate::{
    config::Config,
    error::LookupError,
    model::{GeoResult, Query, WeatherReading},
};

use super::WeatherProvider;

const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Open-Meteo lookup pipeline: geocode the place name, then fetch
/// current conditions for the resolved coordinates. No API key needed.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    http: Client,
    geocoding_url: String,
    forecast_url: String,
    language: String,
    max_candidates: u32,
}

impl OpenMeteoProvider {
    pub fn new(config: &Config) -> Result<Self, LookupError> {
        Self::with_base_urls(config, GEOCODING_URL, FORECAST_URL)
    }

    /// Build a provider against explicit endpoints. Integration tests use
    /// this to point both steps at a local mock server.
    pub fn with_base_urls(
        config: &Config,
        geocoding_url: &str,
        forecast_url: &str,
    ) -> Result<Self, LookupError> {
        let http = Client::builder().timeout(config.request_timeout()).build()?;

        Ok(Self {
            http,
            geocoding_url: geocoding_url.to_owned(),
            forecast_url: forecast_url.to_owned(),
            language: config.language.clone(),
            max_candidates: config.max_candidates.max(1),
        })
    }

    async fn geocode(&self, query: &Query) -> Result<GeoResult, LookupError> {
        let count = self.max_candidates.to_string();

        let res = self
            .http
            .get(&self.geocoding_url)
            .query(&[
                ("name", query.as_str()),
                ("count", count.as_str()),
                ("language", self.language.as_str()),
                ("format", "json"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let parsed: GeocodingResponse = res.json().await?;
        let candidates = parsed.results.unwrap_or_default();

        let Some(first) = candidates.first() else {
            tracing::info!(query = %query, "no geocoding match");
            return Err(LookupError::NotFound);
        };

        // First match wins. When the config asked for more candidates and
        // several places share the name, flag the ambiguity in the log.
        let competing: Vec<String> = candidates[1..]
            .iter()
            .filter(|c| c.name.eq_ignore_ascii_case(&first.name))
            .map(GeocodingHit::describe)
            .collect();
        if !competing.is_empty() {
            tracing::warn!(
                query = %query,
                using = %first.describe(),
                "ambiguous place name, ignoring: {}",
                competing.join("; ")
            );
        }

        Ok(GeoResult {
            latitude: first.latitude,
            longitude: first.longitude,
            resolved_name: first.name.clone(),
            region: first.admin1.clone(),
            country_code: first.country_code.clone(),
        })
    }

    async fn current_conditions(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentConditions, LookupError> {
        let res = self
            .http
            .get(&self.forecast_url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current", "temperature_2m,weather_code".to_owned()),
                ("timezone", "auto".to_owned()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let parsed: ForecastResponse = res.json().await?;

        parsed.current.ok_or_else(|| {
            LookupError::Malformed("forecast response has no `current` block".to_owned())
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn lookup(&self, query: &Query) -> Result<WeatherReading, LookupError> {
        tracing::debug!(query = %query, "resolving place name");
        let place = self.geocode(query).await?;

        tracing::debug!(
            latitude = place.latitude,
            longitude = place.longitude,
            name = %place.resolved_name,
            "fetching current conditions"
        );
        let current = self.current_conditions(place.latitude, place.longitude).await?;

        Ok(WeatherReading {
            city: place.resolved_name,
            region: place.region,
            country: place.country_code,
            temperature_c: current.temperature_2m.round() as i32,
            weather_code: current.weather_code,
            observed_at: current.observed_at(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodingHit>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingHit {
    latitude: f64,
    longitude: f64,
    name: String,
    admin1: Option<String>,
    country_code: String,
}

impl GeocodingHit {
    fn describe(&self) -> String {
        match &self.admin1 {
            Some(region) => format!("{}, {}, {}", self.name, region, self.country_code),
            None => format!("{}, {}", self.name, self.country_code),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: Option<CurrentConditions>,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    time: Option<String>,
    temperature_2m: f64,
    weather_code: i32,
}

impl CurrentConditions {
    /// The endpoint reports local wall time as `2024-05-01T12:15`;
    /// unparseable or absent values degrade to `None`.
    fn observed_at(&self) -> Option<NaiveDateTime> {
        let raw = self.time.as_deref()?;
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
            .ok()
    }
}
