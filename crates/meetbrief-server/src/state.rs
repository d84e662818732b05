//! Shared application state.

use std::sync::Arc;

use meetbrief_core::BriefConfig;
use meetbrief_nlp::NlpEngine;
use meetbrief_runtime::Orchestrator;

/// State shared by every route handler.
pub struct AppState {
    pub config: BriefConfig,
    pub engine: Arc<dyn NlpEngine>,
    pub orchestrator: Orchestrator,
}

impl AppState {
    pub fn new(config: BriefConfig, engine: Arc<dyn NlpEngine>) -> meetbrief_core::Result<Self> {
        let orchestrator = Orchestrator::new(config.pipeline.clone(), engine.clone())?;
        Ok(Self {
            config,
            engine,
            orchestrator,
        })
    }
}
