//! Meetbrief Ingest: transcript chunking, map-reduce summarization, and the
//! rule-based action item / requirement / client extractors.

pub mod chunking;
pub mod extract;
pub mod summarize;

pub use chunking::{chunk_text, OverlapChunker, TextChunk};
pub use extract::{extract_action_items, extract_clients, extract_requirements, rank_clients};
pub use summarize::{Aggregator, ChunkSummarizer, Digest};
