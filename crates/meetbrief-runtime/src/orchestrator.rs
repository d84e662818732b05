//! Orchestrator: runs every pipeline stage for one transcript.

use std::sync::Arc;

use meetbrief_core::{Error, FinalResult, PipelineConfig, Result};
use meetbrief_ingest::{
    extract_action_items, extract_clients, extract_requirements, Aggregator, ChunkSummarizer,
    OverlapChunker,
};
use meetbrief_nlp::NlpEngine;
use tracing::{debug, error, info};

/// Coordinates chunking, summarization and extraction.
///
/// Holds no per-run state, so one instance can serve every request.
pub struct Orchestrator {
    config: PipelineConfig,
    chunker: OverlapChunker,
    engine: Arc<dyn NlpEngine>,
}

impl Orchestrator {
    /// Fails with `Error::Config` if the chunking parameters are unusable.
    pub fn new(config: PipelineConfig, engine: Arc<dyn NlpEngine>) -> Result<Self> {
        config.validate()?;
        let chunker = OverlapChunker::new(config.max_chars, config.overlap)?;

        info!(
            "Orchestrator initialized: engine={}, max_chars={}, overlap={}",
            engine.name(),
            config.max_chars,
            config.overlap
        );

        Ok(Self {
            config,
            chunker,
            engine,
        })
    }

    /// Build the brief, surfacing stage errors as they are.
    pub fn run(&self, transcript: &str) -> Result<FinalResult> {
        if transcript.trim().is_empty() {
            return Err(Error::InvalidInput("No transcript provided".into()));
        }
        let engine = self.engine.as_ref();

        let chunks = self.chunker.chunk(transcript);
        debug!("Split transcript into {} chunks", chunks.len());

        let summarizer = ChunkSummarizer::new(engine).with_phrase_limit(self.config.phrase_limit);
        let digest = Aggregator::new(summarizer)
            .with_limits(self.config.chunk_sentences, self.config.summary_sentences)
            .reduce(&chunks)?;
        debug!("Summary built from {} minute lines", digest.minutes.len());

        // Extractors see the whole transcript, not the chunks.
        let action_items = extract_action_items(engine, transcript)?;
        let clients = extract_clients(engine, transcript, self.config.client_limit)?;
        let requirements = extract_requirements(engine, transcript, self.config.requirement_limit)?;
        debug!(
            "Extracted {} action items, {} clients, {} requirements",
            action_items.len(),
            clients.len(),
            requirements.len()
        );

        info!(
            "Brief ready: {} chars, {} chunks, {} minutes",
            transcript.chars().count(),
            chunks.len(),
            digest.minutes.len()
        );

        Ok(FinalResult {
            summary: digest.summary,
            action_items,
            clients,
            requirements,
            minutes: digest.minutes,
        })
    }

    /// Boundary form of [`run`](Self::run): bad input passes through, any
    /// other failure becomes `Error::Internal` carrying its message.
    pub fn brief(&self, transcript: &str) -> Result<FinalResult> {
        self.run(transcript).map_err(|e| {
            if e.is_invalid_input() {
                e
            } else {
                error!("Brief failed: {}", e);
                e.into_internal()
            }
        })
    }
}
