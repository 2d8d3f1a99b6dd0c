use std::sync::Arc;

use crate::llm_client::CompletionProvider;
use crate::search_client::SearchProvider;

/// Shared application state injected into all route handlers via Axum extractors.
/// Clients are built once at startup and are read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<dyn SearchProvider>,
    pub llm: Arc<dyn CompletionProvider>,
}
