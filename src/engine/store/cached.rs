use std::sync::Arc;
use std::time::Duration;

use super::query::{Database, QueryKey, QuerySpec};
use super::record::Record;
use super::source::RowSource;
use crate::engine::cache::{QueryCache, QueryCacheStats};
use crate::engine::errors::StoreError;
use crate::shared::config::CacheConfig;

/// Routes each query to its datastore through a shared result cache.
pub struct CachedStore {
    processor: Arc<dyn RowSource>,
    alerts: Arc<dyn RowSource>,
    cache: QueryCache<QueryKey, Vec<Record>>,
    processor_ttl: Duration,
    alerts_ttl: Duration,
}

impl CachedStore {
    pub fn new(
        processor: Arc<dyn RowSource>,
        alerts: Arc<dyn RowSource>,
        cfg: &CacheConfig,
    ) -> Self {
        Self::with_cache(
            processor,
            alerts,
            QueryCache::new(cfg.max_entries),
            cfg.processor_ttl(),
            cfg.alerts_ttl(),
        )
    }

    pub fn with_cache(
        processor: Arc<dyn RowSource>,
        alerts: Arc<dyn RowSource>,
        cache: QueryCache<QueryKey, Vec<Record>>,
        processor_ttl: Duration,
        alerts_ttl: Duration,
    ) -> Self {
        Self {
            processor,
            alerts,
            cache,
            processor_ttl,
            alerts_ttl,
        }
    }

    pub async fn run(&self, query: &QuerySpec) -> Result<Arc<Vec<Record>>, StoreError> {
        let (source, ttl) = match query.key.database {
            Database::Processor => (&self.processor, self.processor_ttl),
            Database::Alerts => (&self.alerts, self.alerts_ttl),
        };
        self.cache
            .get_or_compute(&query.key, ttl, || source.fetch(query))
            .await
    }

    pub fn cache_stats(&self) -> QueryCacheStats {
        self.cache.stats()
    }
}
