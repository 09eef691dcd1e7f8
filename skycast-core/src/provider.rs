use crate::{Config, LookupError, Query, WeatherReading, provider::open_meteo::OpenMeteoProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod open_meteo;

/// Seam between the presentation layer and the lookup pipeline.
///
/// One lookup resolves a place name to current conditions, or fails with
/// a typed [`LookupError`]. Implementations issue their requests
/// sequentially and never expose partial results.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn lookup(&self, query: &Query) -> Result<WeatherReading, LookupError>;
}

/// Construct the default provider from config.
pub fn provider_from_config(config: &Config) -> Result<Box<dyn WeatherProvider>, LookupError> {
    Ok(Box::new(OpenMeteoProvider::new(config)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_default_config_builds() {
        let cfg = Config::default();
        let provider = provider_from_config(&cfg);
        assert!(provider.is_ok());
    }
}
