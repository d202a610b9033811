use std::sync::Arc;

use crate::jobs::source::ContentSource;
use crate::llm_client::LlmProvider;
use crate::store::Store;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub llm: Arc<dyn LlmProvider>,
    /// Upstream content for lazy catalog seeding.
    pub job_source: Arc<dyn ContentSource>,
}
