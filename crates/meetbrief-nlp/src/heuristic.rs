//! Rule-based `NlpEngine` provider.

use parking_lot::RwLock;
use tracing::debug;

use crate::engine::{EngineError, Entity, NlpEngine, Pipe, Sentence, SentenceExtract};
use crate::{entities, phrases, segment};

/// Deterministic engine built from regex and keyword rules.
///
/// Segmentation and entity recognition are always available. Phrase ranking
/// (and therefore sentence ranking) must be registered with `ensure_pipe`.
pub struct HeuristicEngine {
    pipes: RwLock<Vec<Pipe>>,
}

impl HeuristicEngine {
    pub fn new() -> Self {
        Self {
            pipes: RwLock::new(vec![Pipe::Segmenter, Pipe::EntityRecognizer]),
        }
    }

    /// Register `pipe` unless it is already present.
    ///
    /// Returns `true` only when the pipe was newly added.
    pub fn ensure_pipe(&self, pipe: Pipe) -> bool {
        if self.pipes.read().contains(&pipe) {
            return false;
        }
        let mut pipes = self.pipes.write();
        if pipes.contains(&pipe) {
            return false;
        }
        pipes.push(pipe);
        true
    }

    pub fn has_pipe(&self, pipe: Pipe) -> bool {
        self.pipes.read().contains(&pipe)
    }

    fn require(&self, pipe: Pipe) -> Result<(), EngineError> {
        if self.has_pipe(pipe) {
            Ok(())
        } else {
            Err(EngineError::PipeMissing(pipe))
        }
    }
}

impl Default for HeuristicEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl NlpEngine for HeuristicEngine {
    fn name(&self) -> &str {
        "heuristic"
    }

    fn pipes(&self) -> Vec<Pipe> {
        self.pipes.read().clone()
    }

    fn segment(&self, text: &str) -> Result<Vec<Sentence>, EngineError> {
        self.require(Pipe::Segmenter)?;
        Ok(segment::split_sentences(text))
    }

    fn recognize_entities(&self, text: &str) -> Result<Vec<Entity>, EngineError> {
        self.require(Pipe::EntityRecognizer)?;
        Ok(entities::recognize(text))
    }

    fn rank_phrases(&self, text: &str, limit_phrases: usize) -> Result<Vec<String>, EngineError> {
        self.require(Pipe::PhraseRank)?;
        Ok(phrases::rank(text, limit_phrases))
    }

    fn extract_summary(
        &self,
        text: &str,
        limit_phrases: usize,
        limit_sentences: usize,
    ) -> Result<Vec<SentenceExtract>, EngineError> {
        self.require(Pipe::PhraseRank)?;
        let ranked = phrases::summarize(text, limit_phrases, limit_sentences)?;
        debug!(
            "Ranked {} sentences (limit_phrases={}, limit_sentences={})",
            ranked.len(),
            limit_phrases,
            limit_sentences
        );
        Ok(ranked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EntityLabel;

    #[test]
    fn test_ensure_pipe_is_idempotent() {
        let engine = HeuristicEngine::new();
        assert!(!engine.has_pipe(Pipe::PhraseRank));
        assert!(engine.ensure_pipe(Pipe::PhraseRank));
        assert!(!engine.ensure_pipe(Pipe::PhraseRank));
        assert!(!engine.ensure_pipe(Pipe::PhraseRank));
        let count = engine
            .pipes()
            .iter()
            .filter(|p| **p == Pipe::PhraseRank)
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_phrase_ranking_requires_registration() {
        let engine = HeuristicEngine::new();
        assert_eq!(
            engine.rank_phrases("Budget review", 5).unwrap_err(),
            EngineError::PipeMissing(Pipe::PhraseRank)
        );
        assert_eq!(
            engine.extract_summary("Budget review.", 15, 3).unwrap_err(),
            EngineError::PipeMissing(Pipe::PhraseRank)
        );
        // Segmentation and NER work without it.
        assert_eq!(engine.segment("One. Two.").unwrap().len(), 2);
        assert!(engine.recognize_entities("Ask Dana.").is_ok());
    }

    #[test]
    fn test_registered_engine_end_to_end() {
        let engine = HeuristicEngine::new();
        engine.ensure_pipe(Pipe::PhraseRank);

        let text = "John will send the report by Friday. Acme Corp needs the integration done.";
        let entities = engine.recognize_entities(text).unwrap();
        assert!(entities
            .iter()
            .any(|e| e.text == "Acme Corp" && e.label == EntityLabel::Org));

        let phrases = engine.rank_phrases(text, 12).unwrap();
        assert!(phrases.iter().any(|p| p.contains("integration")));

        let summary = engine.extract_summary(text, 15, 6).unwrap();
        assert_eq!(summary.len(), 2);
    }

    #[test]
    fn test_shared_across_threads() {
        let engine = std::sync::Arc::new(HeuristicEngine::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = engine.clone();
                std::thread::spawn(move || engine.ensure_pipe(Pipe::PhraseRank))
            })
            .collect();
        let added = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|added| *added)
            .count();
        assert_eq!(added, 1);
        assert_eq!(engine.pipes().len(), 3);
    }
}
