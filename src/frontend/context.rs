use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;

use crate::engine::errors::StoreError;
use crate::engine::panels::PanelService;
use crate::engine::store::{CachedStore, PgRowSource};
use crate::shared::config::Settings;
use crate::shared::datetime::TimeConfig;

/// Everything a request handler needs, shared across connections.
pub struct FrontendContext {
    pub panels: PanelService,
    pub time: TimeConfig,
}

impl FrontendContext {
    pub fn new(panels: PanelService, time: TimeConfig) -> Self {
        Self { panels, time }
    }

    /// Wires both datastore pools, the shared result cache and the panel service.
    pub fn from_settings(settings: &Settings) -> Result<Arc<Self>, StoreError> {
        let db = &settings.database;
        let processor = PgRowSource::connect_lazy(&db.processor_url, db)?;
        let alerts = PgRowSource::connect_lazy(&db.alerts_url, db)?;
        let store = CachedStore::new(Arc::new(processor), Arc::new(alerts), &settings.cache);

        info!(
            target: "story_dash::frontend",
            max_entries = settings.cache.max_entries,
            processor_ttl_secs = settings.cache.processor_ttl_secs,
            alerts_ttl_secs = settings.cache.alerts_ttl_secs,
            "Datastores configured"
        );

        let panels = PanelService::new(Arc::new(store), settings.dashboard.clone());
        Ok(Arc::new(Self::new(panels, settings.time_config())))
    }

    pub fn today(&self) -> NaiveDate {
        self.time.today()
    }
}
