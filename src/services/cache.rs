use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use lru::LruCache;
use tokio::sync::Mutex;

use crate::models::DetailRecord;

struct CacheEntry {
    record: DetailRecord,
    stored_at: Instant,
}

/// Bounded in-process cache of detail lookups, keyed by IMDb identifier
///
/// Entries outlive individual requests and are evicted least-recently-used
/// once capacity is reached. An optional TTL expires entries on read. All
/// access is serialized through a mutex, so concurrent enrichment workers
/// cannot corrupt the recency list or double-count capacity.
pub struct DetailCache {
    inner: Mutex<LruCache<String, CacheEntry>>,
    ttl: Option<Duration>,
}

impl DetailCache {
    pub fn new(capacity: usize, ttl: Option<Duration>) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
            ttl,
        }
    }

    /// Returns a clone of the cached record, promoting it to most recently
    /// used. Expired entries are removed and reported as absent.
    pub async fn get(&self, imdb_id: &str) -> Option<DetailRecord> {
        let mut cache = self.inner.lock().await;

        if let Some(ttl) = self.ttl {
            let expired = cache
                .peek(imdb_id)
                .map(|entry| entry.stored_at.elapsed() > ttl)
                .unwrap_or(false);
            if expired {
                cache.pop(imdb_id);
                return None;
            }
        }

        cache.get(imdb_id).map(|entry| entry.record.clone())
    }

    pub async fn put(&self, imdb_id: &str, record: DetailRecord) {
        let mut cache = self.inner.lock().await;
        cache.put(
            imdb_id.to_string(),
            CacheEntry {
                record,
                stored_at: Instant::now(),
            },
        );
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }
}
