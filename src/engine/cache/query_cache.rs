use std::collections::HashMap;
use std::fmt::Debug;
use std::future::Future;
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use lru::LruCache;
use parking_lot::Mutex;
use tracing::debug;

use super::clock::{Clock, SystemClock};
use super::query_cache_entry::QueryCacheEntry;
use super::query_cache_stats::QueryCacheStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOutcome {
    Hit,
    Miss,
}

/// TTL-governed memo of query results keyed by the full query identity.
///
/// A miss runs the loader once per key even with concurrent callers: later callers
/// wait on the key's in-flight gate and then read the stored value. Loader errors are
/// handed back to the caller that ran the loader and nothing is stored, so the next
/// call retries.
pub struct QueryCache<K: Hash + Eq, V> {
    inner: Mutex<LruCache<K, QueryCacheEntry<V>>>,
    inflight: Mutex<HashMap<K, Arc<tokio::sync::Mutex<()>>>>,
    clock: Arc<dyn Clock>,
    hits: AtomicU64,
    misses: AtomicU64,
    expirations: AtomicU64,
    evictions: AtomicU64,
}

impl<K, V> QueryCache<K, V>
where
    K: Hash + Eq + Clone + Debug,
{
    pub fn new(capacity: usize) -> Self {
        Self::with_clock(capacity, Arc::new(SystemClock))
    }

    pub fn with_clock(capacity: usize, clock: Arc<dyn Clock>) -> Self {
        let cap = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(LruCache::new(cap)),
            inflight: Mutex::new(HashMap::new()),
            clock,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            expirations: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }

    pub fn stats(&self) -> QueryCacheStats {
        let guard = self.inner.lock();
        QueryCacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            expirations: self.expirations.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            current_items: guard.len(),
            capacity: guard.cap().get(),
        }
    }

    pub async fn get_or_compute<F, Fut, E>(
        &self,
        key: &K,
        ttl: Duration,
        loader: F,
    ) -> Result<Arc<V>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        self.get_or_compute_with_outcome(key, ttl, loader)
            .await
            .map(|(value, _)| value)
    }

    pub async fn get_or_compute_with_outcome<F, Fut, E>(
        &self,
        key: &K,
        ttl: Duration,
        loader: F,
    ) -> Result<(Arc<V>, CacheOutcome), E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.lookup(key, ttl) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!(target: "story_dash::cache", ?key, "cache hit");
            return Ok((value, CacheOutcome::Hit));
        }

        let gate = self.gate_for(key);
        let _loader_guard = gate.lock().await;

        // Re-check: another caller may have loaded while we waited
        if let Some(value) = self.lookup(key, ttl) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!(target: "story_dash::cache", ?key, "cache hit after wait");
            return Ok((value, CacheOutcome::Hit));
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!(target: "story_dash::cache", ?key, "cache miss, running query");
        let result = loader().await;

        let outcome = result.map(|value| {
            let value = Arc::new(value);
            self.insert(key.clone(), Arc::clone(&value));
            (value, CacheOutcome::Miss)
        });

        self.release_gate(key, &gate);
        outcome
    }

    /// The key's in-flight gate, created on first use.
    pub(super) fn gate_for(&self, key: &K) -> Arc<tokio::sync::Mutex<()>> {
        let mut map = self.inflight.lock();
        Arc::clone(
            map.entry(key.clone())
                .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(()))),
        )
    }

    /// Drops the key's gate only if it is still `gate`; a newer gate belongs to another load.
    pub(super) fn release_gate(&self, key: &K, gate: &Arc<tokio::sync::Mutex<()>>) {
        let mut map = self.inflight.lock();
        if map.get(key).is_some_and(|current| Arc::ptr_eq(current, gate)) {
            map.remove(key);
        }
    }

    fn lookup(&self, key: &K, ttl: Duration) -> Option<Arc<V>> {
        let now = self.clock.now();
        let mut guard = self.inner.lock();
        match guard.get(key) {
            Some(entry) if entry.is_fresh(now, ttl) => return Some(Arc::clone(&entry.value)),
            Some(_) => {}
            None => return None,
        }
        guard.pop(key);
        self.expirations.fetch_add(1, Ordering::Relaxed);
        debug!(target: "story_dash::cache", ?key, "cache entry expired");
        None
    }

    fn insert(&self, key: K, value: Arc<V>) {
        let entry = QueryCacheEntry::new(value, self.clock.now());
        let mut guard = self.inner.lock();
        if !guard.contains(&key)
            && guard.len() >= guard.cap().get()
            && guard.pop_lru().is_some()
        {
            self.evictions.fetch_add(1, Ordering::Relaxed);
        }
        guard.put(key, entry);
    }
}
