use std::sync::Arc;

use crate::catalog::{GuidanceCatalog, ToneCatalog};
use crate::llm_client::ChatBackend;

/// Shared application state injected into all route handlers via Axum extractors.
/// Catalogs are read-only after startup; nothing here is mutated per request.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend behind a trait object so tests can swap in a stub.
    pub llm: Arc<dyn ChatBackend>,
    pub guidance: Arc<GuidanceCatalog>,
    pub tones: Arc<ToneCatalog>,
}
