use moka::sync::Cache;
use providers::POI;
use std::time::{Duration, Instant};

/// Backstop so moka's own housekeeping eventually reclaims entries whose caller
/// never calls `Get` again; real expiry is still enforced per-entry below.
const HOUSEKEEPING_TTL: Duration = Duration::from_secs(24 * 60 * 60);
const MAX_ENTRIES: u64 = 100_000;

#[derive(Clone)]
struct Entry {
    value: Vec<POI>,
    expires_at: Instant,
}

/// Process-local L1 tier. Safe for concurrent readers and writers (moka's sync
/// cache is internally synchronized). Entries past their own expiration are
/// treated as misses even if moka hasn't swept them yet.
pub struct MemoryCache {
    cache: Cache<String, Entry>,
}

impl MemoryCache {
    pub fn new() -> Self {
        let cache = Cache::builder()
            .max_capacity(MAX_ENTRIES)
            .time_to_live(HOUSEKEEPING_TTL)
            .build();
        MemoryCache { cache }
    }

    pub fn get(&self, key: &str) -> Option<Vec<POI>> {
        let entry = self.cache.get(key)?;
        if entry.expires_at <= Instant::now() {
            self.cache.invalidate(key);
            return None;
        }
        Some(entry.value)
    }

    pub fn set(&self, key: &str, value: Vec<POI>, ttl: Duration) {
        self.cache.insert(
            key.to_string(),
            Entry {
                value,
                expires_at: Instant::now() + ttl,
            },
        );
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poi(id: &str) -> POI {
        POI {
            id: id.to_string(),
            name: "Test Place".to_string(),
            source: "test".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn set_then_get_returns_the_value() {
        let cache = MemoryCache::new();
        cache.set("k1", vec![poi("1")], Duration::from_secs(60));
        let got = cache.get("k1").unwrap();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].id, "1");
    }

    #[test]
    fn expired_entries_are_treated_as_misses() {
        let cache = MemoryCache::new();
        cache.set("k1", vec![poi("1")], Duration::from_millis(0));
        std::thread::sleep(Duration::from_millis(5));
        assert!(cache.get("k1").is_none());
    }

    #[test]
    fn missing_key_is_a_miss() {
        let cache = MemoryCache::new();
        assert!(cache.get("nope").is_none());
    }
}
