pub mod clock;
pub mod query_cache;
pub mod query_cache_entry;
pub mod query_cache_stats;

pub use clock::{Clock, SystemClock};
pub use query_cache::{CacheOutcome, QueryCache};
pub use query_cache_entry::QueryCacheEntry;
pub use query_cache_stats::QueryCacheStats;

#[cfg(test)]
pub use clock::ManualClock;
