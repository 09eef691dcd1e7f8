//! Core library for the `skycast` CLI.
//!
//! This crate defines:
//! - Configuration (timeouts, geocoding language, candidate count)
//! - The weather lookup pipeline (geocode, then current conditions)
//! - Shared domain models and the WMO code-to-presentation table
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries
//! or services.

pub mod conditions;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use conditions::{Condition, ConditionIcon, WeatherPresentation, classify};
pub use config::Config;
pub use error::LookupError;
pub use model::{GeoResult, Query, WeatherReading};
pub use provider::{WeatherProvider, provider_from_config};
