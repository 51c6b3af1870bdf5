//! Shared application state.

use std::sync::Arc;

use anyhow::Context;
use shield_analysis::AnalyzerChain;
use shield_auth::{Authenticator, authenticator_from_config};
use shield_config::ShieldConfig;
use shield_db::ShieldStore;

use crate::reports::ReportStorage;

/// Handles constructed once at startup and cloned into every request.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ShieldStore>,
    pub analyzer: Arc<AnalyzerChain>,
    pub authenticator: Arc<dyn Authenticator>,
    pub reports: Arc<ReportStorage>,
}

impl AppState {
    #[must_use]
    pub fn new(
        store: ShieldStore,
        analyzer: AnalyzerChain,
        authenticator: Arc<dyn Authenticator>,
        reports: ReportStorage,
    ) -> Self {
        Self {
            store: Arc::new(store),
            analyzer: Arc::new(analyzer),
            authenticator,
            reports: Arc::new(reports),
        }
    }

    /// Open the database and build the analysis chain, authenticator and
    /// report storage from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated.
    pub async fn from_config(config: &ShieldConfig) -> anyhow::Result<Self> {
        let store = ShieldStore::new_local(&config.database.path)
            .await
            .with_context(|| format!("failed to open database at {}", config.database.path))?;

        Ok(Self::new(
            store,
            AnalyzerChain::from_config(config),
            authenticator_from_config(config),
            ReportStorage::from_config(&config.server),
        ))
    }
}
