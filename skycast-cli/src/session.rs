use skycast_core::{LookupError, WeatherReading};

/// Presentation-layer lookup state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Idle,
    Loading,
    Success(WeatherReading),
    Failed(String),
}

/// Holder for the four pieces of per-lookup state the UI needs: nothing
/// in flight, in flight, last reading, or last error message. Owned by
/// the presentation layer; the lookup pipeline never sees it.
#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Move to `Loading`, discarding any stale result or error.
    ///
    /// Returns `false` while a lookup is already in flight: overlapping
    /// lookups are ignored rather than raced or cancelled.
    pub fn begin(&mut self) -> bool {
        if matches!(self.state, SessionState::Loading) {
            return false;
        }
        self.state = SessionState::Loading;
        true
    }

    /// Record the outcome of the in-flight lookup. Errors store their
    /// user-facing message; a stale success never survives a failure.
    pub fn finish(&mut self, result: Result<WeatherReading, LookupError>) {
        self.state = match result {
            Ok(reading) => SessionState::Success(reading),
            Err(err) => SessionState::Failed(err.user_message()),
        };
    }
}
