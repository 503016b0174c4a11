use crate::memory::MemoryCache;
use crate::redis::RedisCache;
use providers::POI;
use std::time::Duration;

/// Fixed TTL applied when an L2 hit is promoted into L1, regardless of the TTL
/// the value was originally `Set` with.
const PROMOTION_TTL: Duration = Duration::from_secs(5 * 60);

/// Two-tier read-through cache: L1 (process-local) backed by `MemoryCache`, L2
/// (shared) backed by `RedisCache`. `Get` tries L1 then L2, promoting an L2 hit
/// back into L1. `Set` writes both tiers with the same caller-supplied TTL and
/// swallows any failure, since the cache is advisory, never a source of request
/// failure. Single-flight suppression on the miss path is deliberately not
/// implemented: concurrent misses for the same key both fall through to the
/// caller, which is fine given provider idempotence.
///
/// `l2` is `None` when the shared backend could not be reached at startup; the
/// cache degrades to L1-only rather than refusing to serve requests, since L2
/// is advisory by design and not worth failing the whole process over.
pub struct LayeredCache {
    l1: MemoryCache,
    l2: Option<RedisCache>,
}

impl LayeredCache {
    pub fn new(l1: MemoryCache, l2: Option<RedisCache>) -> Self {
        LayeredCache { l1, l2 }
    }

    pub async fn get(&self, key: &str) -> Option<Vec<POI>> {
        if let Some(value) = self.l1.get(key) {
            return Some(value);
        }

        let l2 = self.l2.as_ref()?;
        let value = l2.get(key).await?;
        self.l1.set(key, value.clone(), PROMOTION_TTL);
        Some(value)
    }

    pub async fn set(&self, key: &str, value: Vec<POI>, ttl: Duration) {
        self.l1.set(key, value.clone(), ttl);
        if let Some(l2) = &self.l2 {
            l2.set(key, &value, ttl).await;
        }
    }

    pub async fn ping_l2(&self) -> bool {
        match &self.l2 {
            Some(l2) => l2.ping().await.is_ok(),
            None => false,
        }
    }
}
