//! Meetbrief NLP: the language capability the brief pipeline runs on.
//!
//! Provides the `NlpEngine` trait (sentence segmentation, entity recognition,
//! keyphrase ranking, ranked sentence extraction). `HeuristicEngine` is the
//! bundled provider: deterministic regex and keyword rules, no model files.
//! Build one per process with `create_engine()` and share the `Arc`.

pub mod engine;
pub mod entities;
pub mod heuristic;
pub mod phrases;
pub mod segment;

pub use engine::{
    EngineError, Entity, EntityLabel, NlpEngine, Pipe, Sentence, SentenceExtract,
};
pub use heuristic::HeuristicEngine;

use std::sync::Arc;

/// Create the process-wide engine with phrase ranking registered.
pub fn create_engine() -> Arc<dyn NlpEngine> {
    let engine = HeuristicEngine::new();
    if engine.ensure_pipe(Pipe::PhraseRank) {
        tracing::debug!("Registered {} pipe", Pipe::PhraseRank);
    }
    tracing::info!(
        "Using {} engine (pipes: {:?})",
        engine.name(),
        engine.pipes()
    );
    Arc::new(engine)
}
