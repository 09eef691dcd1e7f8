use thiserror::Error;

/// Lookup failures surfaced to the presentation layer.
///
/// An empty query is not represented here: it is rejected before the
/// lookup is ever invoked (see [`crate::model::Query`]).
#[derive(Debug, Error)]
pub enum LookupError {
    /// Geocoding returned no match for the query.
    #[error("City not found")]
    NotFound,

    /// Transport, status or decode failure at either step.
    #[error("Error fetching data: {0}")]
    Network(#[from] reqwest::Error),

    /// The forecast endpoint answered 2xx but the body was missing the
    /// current-conditions block.
    #[error("Malformed forecast response: {0}")]
    Malformed(String),
}

impl LookupError {
    /// Human-readable message for the error banner. `NotFound` keeps its
    /// specific message; everything else renders the generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound => "City not found".to_owned(),
            Self::Network(_) | Self::Malformed(_) => "Error fetching data.".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_keeps_specific_message() {
        assert_eq!(LookupError::NotFound.user_message(), "City not found");
    }

    #[test]
    fn malformed_renders_generic_banner() {
        let err = LookupError::Malformed("missing `current`".to_owned());
        assert_eq!(err.user_message(), "Error fetching data.");
        assert!(err.to_string().contains("missing `current`"));
    }
}
