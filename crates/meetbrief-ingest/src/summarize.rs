//! Two-level extractive summarization.
//!
//! Map: rank sentences inside every chunk. Reduce: rank the concatenated
//! map-stage sentences once more to get the final narrative. The map-stage
//! list is kept verbatim as the meeting minutes.

use tracing::{debug, warn};

use meetbrief_core::config::{
    DEFAULT_CHUNK_SENTENCES, DEFAULT_PHRASE_LIMIT, DEFAULT_SUMMARY_SENTENCES,
};
use meetbrief_core::Result;
use meetbrief_nlp::NlpEngine;

/// Extracts the most important sentences of one text segment.
pub struct ChunkSummarizer<'a> {
    engine: &'a dyn NlpEngine,
    phrase_limit: usize,
}

impl<'a> ChunkSummarizer<'a> {
    pub fn new(engine: &'a dyn NlpEngine) -> Self {
        Self {
            engine,
            phrase_limit: DEFAULT_PHRASE_LIMIT,
        }
    }

    pub fn with_phrase_limit(mut self, phrase_limit: usize) -> Self {
        self.phrase_limit = phrase_limit;
        self
    }

    /// Up to `sentence_limit` sentences, most important first.
    ///
    /// If the engine cannot rank the chunk, the first `sentence_limit`
    /// sentences in document order are returned instead. Only a
    /// segmentation failure escapes.
    pub fn summarize(&self, chunk: &str, sentence_limit: usize) -> Result<Vec<String>> {
        match self
            .engine
            .extract_summary(chunk, self.phrase_limit, sentence_limit)
        {
            Ok(ranked) => Ok(ranked.into_iter().map(|s| s.text).collect()),
            Err(e) => {
                warn!(
                    "Sentence ranking failed ({}), keeping first {} sentences",
                    e, sentence_limit
                );
                self.leading_sentences(chunk, sentence_limit)
            }
        }
    }

    fn leading_sentences(&self, chunk: &str, sentence_limit: usize) -> Result<Vec<String>> {
        Ok(self
            .engine
            .segment(chunk)?
            .into_iter()
            .take(sentence_limit)
            .map(|s| s.text.trim().to_string())
            .collect())
    }
}

/// Output of the map-reduce pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Digest {
    /// Final sentences joined with single spaces.
    pub summary: String,
    /// Map-stage sentences, chunk order then rank order.
    pub minutes: Vec<String>,
}

/// Reduces per-chunk summaries into one summary.
pub struct Aggregator<'a> {
    summarizer: ChunkSummarizer<'a>,
    chunk_sentences: usize,
    summary_sentences: usize,
}

impl<'a> Aggregator<'a> {
    pub fn new(summarizer: ChunkSummarizer<'a>) -> Self {
        Self {
            summarizer,
            chunk_sentences: DEFAULT_CHUNK_SENTENCES,
            summary_sentences: DEFAULT_SUMMARY_SENTENCES,
        }
    }

    /// Sentences kept per chunk (map) and in the final summary (reduce).
    pub fn with_limits(mut self, chunk_sentences: usize, summary_sentences: usize) -> Self {
        self.chunk_sentences = chunk_sentences;
        self.summary_sentences = summary_sentences;
        self
    }

    pub fn reduce(&self, chunks: &[String]) -> Result<Digest> {
        let mut minutes = Vec::new();
        for (i, chunk) in chunks.iter().enumerate() {
            let sentences = self.summarizer.summarize(chunk, self.chunk_sentences)?;
            debug!("Chunk {}/{}: {} sentences", i + 1, chunks.len(), sentences.len());
            minutes.extend(sentences);
        }

        if minutes.is_empty() {
            return Ok(Digest::default());
        }

        let combined = minutes.join("\n");
        let summary = self
            .summarizer
            .summarize(&combined, self.summary_sentences)?
            .join(" ");

        Ok(Digest { summary, minutes })
    }
}
