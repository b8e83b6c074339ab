//! Shared application state for the Axum server.

use std::sync::Arc;

use tokio::sync::RwLock;
use tp_insight_log::{FileInsightStore, InsightStore};

use crate::config::ServerConfig;
use crate::metrics::SessionMetrics;
use crate::tools::ToolRegistry;

/// Shared application state, cheap to clone into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub registry: Arc<ToolRegistry>,
    /// Insight log backend (file in production, mock in tests).
    pub store: Arc<dyn InsightStore>,
    pub metrics: Arc<RwLock<SessionMetrics>>,
}

impl AppState {
    /// State backed by the insight file named in `config`.
    pub fn new(config: ServerConfig) -> Self {
        let store = Arc::new(FileInsightStore::new(config.insights_path.clone()));
        Self::with_store(config, store)
    }

    /// State with an explicit store.
    pub fn with_store(config: ServerConfig, store: Arc<dyn InsightStore>) -> Self {
        Self {
            config: Arc::new(config),
            registry: Arc::new(ToolRegistry::with_defaults()),
            store,
            metrics: Arc::new(RwLock::new(SessionMetrics::new())),
        }
    }
}
