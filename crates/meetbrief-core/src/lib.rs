//! Meetbrief Core: shared brief types, error taxonomy, configuration.

pub mod config;
pub mod error;
pub mod types;

pub use config::{BriefConfig, PipelineConfig};
pub use error::{Error, Result};
pub use types::{ActionItem, ClientEntity, FinalResult};
