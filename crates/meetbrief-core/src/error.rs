//! Error types for Meetbrief.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Missing or empty transcript. Reported to callers as a client error.
    #[error("{0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// A single NLP engine call failed.
    #[error("Engine error: {0}")]
    Engine(String),

    #[error("{0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error should be reported as bad input rather than an
    /// internal failure.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Collapse any non-input failure into `Internal`, keeping its message.
    pub fn into_internal(self) -> Self {
        match self {
            Self::InvalidInput(_) | Self::Internal(_) => self,
            other => Self::Internal(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display_is_bare_message() {
        let e = Error::InvalidInput("No transcript provided".into());
        assert_eq!(e.to_string(), "No transcript provided");
        assert!(e.is_invalid_input());
    }

    #[test]
    fn test_into_internal_keeps_message() {
        let e = Error::Engine("segmentation failed".into()).into_internal();
        assert!(matches!(e, Error::Internal(_)));
        assert_eq!(e.to_string(), "Engine error: segmentation failed");
    }

    #[test]
    fn test_into_internal_passes_invalid_input_through() {
        let e = Error::InvalidInput("empty".into()).into_internal();
        assert!(e.is_invalid_input());
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let e: Error = err.into();
        assert!(matches!(e, Error::Json(_)));
        assert!(e.to_string().starts_with("JSON error:"));
    }
}
