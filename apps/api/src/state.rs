use std::sync::Arc;

use sqlx::SqlitePool;

use crate::llm_client::ChatProvider;
use crate::scoring::match_scorer::MatchScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    /// Match scorer; runs in deterministic mock mode when no chat provider
    /// is configured.
    pub scorer: MatchScorer,
    /// Chat capability for answer generation. `None` means mock mode.
    pub chat: Option<Arc<dyn ChatProvider>>,
}

#[cfg(test)]
impl AppState {
    /// In-memory state with no chat provider, for handler tests.
    pub(crate) async fn for_tests() -> Self {
        AppState {
            db: crate::store::test_pool().await,
            scorer: MatchScorer::new(None),
            chat: None,
        }
    }
}
