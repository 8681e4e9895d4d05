use std::sync::Arc;
use std::time::{Duration, Instant};

/// Stored value in the query result cache, stamped with when it was fetched.
#[derive(Debug)]
pub struct QueryCacheEntry<V> {
    pub value: Arc<V>,
    pub fetched_at: Instant,
}

impl<V> QueryCacheEntry<V> {
    pub fn new(value: Arc<V>, fetched_at: Instant) -> Self {
        Self { value, fetched_at }
    }

    /// Valid while `now - fetched_at < ttl`.
    pub fn is_fresh(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.fetched_at) < ttl
    }
}
