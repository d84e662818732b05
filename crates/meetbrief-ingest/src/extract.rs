//! Rule-based brief extraction over engine annotations.
//!
//! Each extractor runs independently over the whole transcript and applies
//! fixed keyword and ranking rules to what the engine reports.

pub mod actions;
pub mod clients;
pub mod requirements;

pub use actions::extract_action_items;
pub use clients::{extract_clients, rank_clients};
pub use requirements::extract_requirements;

#[cfg(test)]
pub(crate) mod stub {
    //! Scripted engine for extractor tests.

    use meetbrief_nlp::segment::split_sentences;
    use meetbrief_nlp::{EngineError, Entity, NlpEngine, Pipe, Sentence, SentenceExtract};

    /// Real segmentation; entities and phrases are fixed lists.
    #[derive(Default)]
    pub struct ScriptedEngine {
        pub entities: Vec<Entity>,
        pub phrases: Vec<String>,
    }

    impl NlpEngine for ScriptedEngine {
        fn name(&self) -> &str {
            "scripted"
        }

        fn pipes(&self) -> Vec<Pipe> {
            vec![Pipe::Segmenter, Pipe::EntityRecognizer, Pipe::PhraseRank]
        }

        fn segment(&self, text: &str) -> Result<Vec<Sentence>, EngineError> {
            Ok(split_sentences(text))
        }

        fn recognize_entities(&self, _text: &str) -> Result<Vec<Entity>, EngineError> {
            Ok(self.entities.clone())
        }

        fn rank_phrases(&self, _text: &str, limit: usize) -> Result<Vec<String>, EngineError> {
            Ok(self.phrases.iter().take(limit).cloned().collect())
        }

        fn extract_summary(
            &self,
            _text: &str,
            _limit_phrases: usize,
            _limit_sentences: usize,
        ) -> Result<Vec<SentenceExtract>, EngineError> {
            Err(EngineError::NoPhrases)
        }
    }
}
