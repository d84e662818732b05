//! Engine capability trait and the annotations it produces.
//!
//! The brief pipeline never looks inside an engine: it asks for sentences,
//! entities, ranked phrases and ranked sentences through `NlpEngine` and
//! applies its own rules on top.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by an engine call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Nothing in the text could be ranked.
    #[error("no rankable phrases in text")]
    NoPhrases,
    /// The call needs a pipe that was never registered.
    #[error("pipe not registered: {0}")]
    PipeMissing(Pipe),
    /// Provider-specific failure.
    #[error("{0}")]
    Failed(String),
}

impl From<EngineError> for meetbrief_core::Error {
    fn from(e: EngineError) -> Self {
        meetbrief_core::Error::Engine(e.to_string())
    }
}

/// A named capability registered on an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pipe {
    Segmenter,
    EntityRecognizer,
    /// Keyphrase ranking; also backs sentence ranking.
    PhraseRank,
}

impl std::fmt::Display for Pipe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Segmenter => write!(f, "segmenter"),
            Self::EntityRecognizer => write!(f, "entity_recognizer"),
            Self::PhraseRank => write!(f, "phrase_rank"),
        }
    }
}

/// A sentence span. Offsets are byte offsets into the analysed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Entity categories the pipeline cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityLabel {
    Person,
    Org,
    Date,
    Time,
}

impl EntityLabel {
    /// PERSON or ORG: candidates for owners and clients.
    pub fn is_party(&self) -> bool {
        matches!(self, Self::Person | Self::Org)
    }

    /// DATE or TIME: candidates for action item deadlines.
    pub fn is_temporal(&self) -> bool {
        matches!(self, Self::Date | Self::Time)
    }
}

/// A recognised entity mention. Offsets are byte offsets into the analysed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
    pub start: usize,
    pub end: usize,
}

impl Entity {
    /// Whether this mention lies inside `sentence`.
    pub fn within(&self, sentence: &Sentence) -> bool {
        self.start >= sentence.start && self.end <= sentence.end
    }
}

/// A ranked sentence returned by `extract_summary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceExtract {
    pub text: String,
    pub score: f64,
}

/// Language capability used by the brief pipeline.
///
/// Implementations are shared across requests, so they must be thread-safe.
pub trait NlpEngine: Send + Sync {
    /// Provider name, for logs and health reporting.
    fn name(&self) -> &str;

    /// Pipes currently registered, in registration order.
    fn pipes(&self) -> Vec<Pipe>;

    /// Split text into sentences, in document order.
    fn segment(&self, text: &str) -> Result<Vec<Sentence>, EngineError>;

    /// Recognise entities across the text, in document order.
    /// Mentions never cross a sentence boundary.
    fn recognize_entities(&self, text: &str) -> Result<Vec<Entity>, EngineError>;

    /// Up to `limit_phrases` keyphrases, most salient first.
    fn rank_phrases(&self, text: &str, limit_phrases: usize) -> Result<Vec<String>, EngineError>;

    /// Up to `limit_sentences` sentences, most important first, ranked
    /// against the top `limit_phrases` keyphrases.
    fn extract_summary(
        &self,
        text: &str,
        limit_phrases: usize,
        limit_sentences: usize,
    ) -> Result<Vec<SentenceExtract>, EngineError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&EntityLabel::Org).unwrap(), r#""ORG""#);
        assert_eq!(
            serde_json::to_string(&EntityLabel::Person).unwrap(),
            r#""PERSON""#
        );
    }

    #[test]
    fn test_label_groups() {
        assert!(EntityLabel::Person.is_party());
        assert!(EntityLabel::Org.is_party());
        assert!(!EntityLabel::Date.is_party());
        assert!(EntityLabel::Date.is_temporal());
        assert!(EntityLabel::Time.is_temporal());
        assert!(!EntityLabel::Org.is_temporal());
    }

    #[test]
    fn test_entity_within_sentence() {
        let sentence = Sentence {
            text: "Acme Corp signed.".into(),
            start: 10,
            end: 27,
        };
        let inside = Entity {
            text: "Acme Corp".into(),
            label: EntityLabel::Org,
            start: 10,
            end: 19,
        };
        let outside = Entity {
            start: 30,
            end: 34,
            ..inside.clone()
        };
        assert!(inside.within(&sentence));
        assert!(!outside.within(&sentence));
    }

    #[test]
    fn test_engine_error_converts_to_core_engine_error() {
        let e: meetbrief_core::Error = EngineError::PipeMissing(Pipe::PhraseRank).into();
        assert!(matches!(e, meetbrief_core::Error::Engine(_)));
        assert!(e.to_string().contains("phrase_rank"));
    }
}
