use clap::{Parser, Subcommand};
use inquire::InquireError;
use skycast_core::{Config, Query, WeatherProvider, WeatherReading, classify, provider_from_config};

use crate::session::{Session, SessionState};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "City weather lookup")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show current weather for a city.
    Show {
        /// City or place name, e.g. "sao paulo".
        city: String,
    },

    /// Look up cities interactively until the prompt is cancelled.
    Prompt,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;
        let provider = provider_from_config(&config)?;

        match self.command {
            Command::Show { city } => show(provider.as_ref(), &city).await,
            Command::Prompt => prompt_loop(provider.as_ref()).await,
        }
    }
}

async fn show(provider: &dyn WeatherProvider, city: &str) -> anyhow::Result<()> {
    // Empty input is a no-op, not an error.
    let Some(query) = Query::new(city) else {
        return Ok(());
    };

    match provider.lookup(&query).await {
        Ok(reading) => {
            println!("{}", render_reading(&reading));
            Ok(())
        }
        Err(err) => {
            tracing::debug!(error = %err, "lookup failed");
            Err(anyhow::anyhow!("{}", err.user_message()))
        }
    }
}

async fn prompt_loop(provider: &dyn WeatherProvider) -> anyhow::Result<()> {
    let mut session = Session::new();

    loop {
        let input = match inquire::Text::new("City:").prompt() {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        let Some(query) = Query::new(&input) else {
            continue;
        };

        if !session.begin() {
            continue;
        }
        let result = provider.lookup(&query).await;
        session.finish(result);

        match session.state() {
            SessionState::Success(reading) => println!("{}", render_reading(reading)),
            SessionState::Failed(message) => println!("{message}"),
            SessionState::Idle | SessionState::Loading => {}
        }
    }
}

fn render_reading(reading: &WeatherReading) -> String {
    let presentation = classify(reading.weather_code);

    let mut place = reading.city.clone();
    if let Some(region) = &reading.region {
        place.push_str(", ");
        place.push_str(region);
    }
    place.push_str(", ");
    place.push_str(&reading.country);

    let mut line = format!(
        "{place}\n{} {}\u{b0}C  {}",
        presentation.icon.glyph(),
        reading.temperature_c,
        presentation.label
    );
    if let Some(observed_at) = reading.observed_at {
        line.push_str(&format!("  (as of {})", observed_at.format("%H:%M")));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use skycast_core::LookupError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct CountingProvider {
        lookups: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl WeatherProvider for CountingProvider {
        async fn lookup(&self, _query: &Query) -> Result<WeatherReading, LookupError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            Err(LookupError::NotFound)
        }
    }

    #[tokio::test]
    async fn empty_input_triggers_no_lookup() {
        let provider = CountingProvider::default();

        show(&provider, "").await.expect("no-op");
        show(&provider, "   ").await.expect("no-op");

        assert_eq!(provider.lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn failed_lookup_surfaces_the_banner_message() {
        let provider = CountingProvider::default();

        let err = show(&provider, "atlantis").await.expect_err("must fail");
        assert_eq!(err.to_string(), "City not found");
        assert_eq!(provider.lookups.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn render_includes_region_when_present() {
        let reading = WeatherReading {
            city: "São Paulo".to_owned(),
            region: Some("SP".to_owned()),
            country: "BR".to_owned(),
            temperature_c: 21,
            weather_code: 3,
            observed_at: None,
        };
        let rendered = render_reading(&reading);
        assert!(rendered.starts_with("São Paulo, SP, BR\n"));
        assert!(rendered.contains("21\u{b0}C"));
        assert!(rendered.contains("Partly cloudy"));
    }

    #[test]
    fn render_omits_absent_region() {
        let reading = WeatherReading {
            city: "Monaco".to_owned(),
            region: None,
            country: "MC".to_owned(),
            temperature_c: 27,
            weather_code: 0,
            observed_at: None,
        };
        let rendered = render_reading(&reading);
        assert!(rendered.starts_with("Monaco, MC\n"));
        assert!(rendered.contains("Clear sky"));
    }
}
