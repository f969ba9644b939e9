use std::sync::Arc;

use crate::config::Config;
use crate::store::AnalysisStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable history backend. Default: InMemoryAnalysisStore.
    pub store: Arc<dyn AnalysisStore>,
}
