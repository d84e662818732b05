//! Runtime orchestrator: turns one transcript into one brief.
//!
//! Wires the chunker, the map-reduce summarizer and the extractors around a
//! shared `NlpEngine`.

pub mod orchestrator;

pub use orchestrator::Orchestrator;
