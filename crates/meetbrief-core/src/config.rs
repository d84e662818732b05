//! Pipeline tuning and process configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default chunk size in characters.
pub const DEFAULT_MAX_CHARS: usize = 4500;
/// Default overlap between consecutive chunks.
pub const DEFAULT_OVERLAP: usize = 300;
/// Sentences kept per chunk in the map stage.
pub const DEFAULT_CHUNK_SENTENCES: usize = 5;
/// Sentences kept in the final reduced summary.
pub const DEFAULT_SUMMARY_SENTENCES: usize = 6;
/// Phrase budget handed to the engine when ranking sentences.
pub const DEFAULT_PHRASE_LIMIT: usize = 15;
/// Ranked phrases considered as requirement candidates.
pub const DEFAULT_REQUIREMENT_LIMIT: usize = 12;
/// Clients reported in the final result.
pub const DEFAULT_CLIENT_LIMIT: usize = 8;
/// Default HTTP port (matches `netlify dev`).
pub const DEFAULT_PORT: u16 = 8888;

/// Knobs for the transcript-to-brief pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub max_chars: usize,
    pub overlap: usize,
    pub chunk_sentences: usize,
    pub summary_sentences: usize,
    pub phrase_limit: usize,
    pub requirement_limit: usize,
    pub client_limit: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            overlap: DEFAULT_OVERLAP,
            chunk_sentences: DEFAULT_CHUNK_SENTENCES,
            summary_sentences: DEFAULT_SUMMARY_SENTENCES,
            phrase_limit: DEFAULT_PHRASE_LIMIT,
            requirement_limit: DEFAULT_REQUIREMENT_LIMIT,
            client_limit: DEFAULT_CLIENT_LIMIT,
        }
    }
}

impl PipelineConfig {
    /// Reject chunking parameters that could stall the chunker.
    pub fn validate(&self) -> Result<()> {
        validate_chunking(self.max_chars, self.overlap)
    }
}

/// `overlap` must be strictly smaller than a non-zero `max_chars`.
pub fn validate_chunking(max_chars: usize, overlap: usize) -> Result<()> {
    if max_chars == 0 {
        return Err(Error::Config("max_chars must be greater than zero".into()));
    }
    if overlap >= max_chars {
        return Err(Error::Config(format!(
            "overlap ({}) must be smaller than max_chars ({})",
            overlap, max_chars
        )));
    }
    Ok(())
}

/// Top-level Meetbrief configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BriefConfig {
    /// HTTP server port.
    pub port: u16,
    pub pipeline: PipelineConfig,
}

impl BriefConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_var(&lookup, "PORT", DEFAULT_PORT)?;

        let pipeline = PipelineConfig {
            max_chars: parse_var(&lookup, "MEETBRIEF_MAX_CHARS", DEFAULT_MAX_CHARS)?,
            overlap: parse_var(&lookup, "MEETBRIEF_OVERLAP", DEFAULT_OVERLAP)?,
            chunk_sentences: parse_var(
                &lookup,
                "MEETBRIEF_CHUNK_SENTENCES",
                DEFAULT_CHUNK_SENTENCES,
            )?,
            summary_sentences: parse_var(
                &lookup,
                "MEETBRIEF_SUMMARY_SENTENCES",
                DEFAULT_SUMMARY_SENTENCES,
            )?,
            phrase_limit: parse_var(&lookup, "MEETBRIEF_PHRASE_LIMIT", DEFAULT_PHRASE_LIMIT)?,
            requirement_limit: parse_var(
                &lookup,
                "MEETBRIEF_REQUIREMENTS",
                DEFAULT_REQUIREMENT_LIMIT,
            )?,
            client_limit: parse_var(&lookup, "MEETBRIEF_CLIENTS", DEFAULT_CLIENT_LIMIT)?,
        };
        pipeline.validate()?;

        Ok(Self { port, pipeline })
    }
}

impl Default for BriefConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            pipeline: PipelineConfig::default(),
        }
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|_| Error::Config(format!("{} has an invalid value: {:?}", key, raw))),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = BriefConfig::from_vars(lookup(&[])).unwrap();
        assert_eq!(config.port, 8888);
        assert_eq!(config.pipeline, PipelineConfig::default());
        assert_eq!(config.pipeline.max_chars, 4500);
        assert_eq!(config.pipeline.overlap, 300);
    }

    #[test]
    fn test_overrides() {
        let config = BriefConfig::from_vars(lookup(&[
            ("PORT", "9000"),
            ("MEETBRIEF_MAX_CHARS", "1200"),
            ("MEETBRIEF_OVERLAP", " 100 "),
            ("MEETBRIEF_CLIENTS", "3"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.pipeline.max_chars, 1200);
        assert_eq!(config.pipeline.overlap, 100);
        assert_eq!(config.pipeline.client_limit, 3);
        assert_eq!(config.pipeline.summary_sentences, 6);
    }

    #[test]
    fn test_unparsable_value_is_config_error() {
        let err = BriefConfig::from_vars(lookup(&[("MEETBRIEF_MAX_CHARS", "lots")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("MEETBRIEF_MAX_CHARS"));
    }

    #[test]
    fn test_overlap_not_below_max_chars_rejected() {
        let err = BriefConfig::from_vars(lookup(&[
            ("MEETBRIEF_MAX_CHARS", "300"),
            ("MEETBRIEF_OVERLAP", "300"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_validate_chunking() {
        assert!(validate_chunking(4500, 300).is_ok());
        assert!(validate_chunking(10, 9).is_ok());
        assert!(validate_chunking(10, 10).is_err());
        assert!(validate_chunking(0, 0).is_err());
    }
}
