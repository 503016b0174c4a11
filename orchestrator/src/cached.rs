use crate::error::OrchestratorError;
use crate::metrics_defs::{CACHE_HITS_TOTAL, CACHE_MISSES_TOTAL};
use crate::orchestrator::Orchestrator;
use crate::parallel::ParallelOrchestrator;
use cache::{LayeredCache, build_key};
use providers::{POI, SearchQuery};
use std::time::Duration;

/// Thin decorator over an `Orchestrator` (in production, the Parallel
/// Orchestrator): cache lookup by fingerprint, populate on miss. Errors are never
/// cached; a legitimately empty success is. Generic over `O` so tests can swap in
/// a fake inner orchestrator instead of standing up real providers.
pub struct CachedOrchestrator<O = ParallelOrchestrator> {
    inner: O,
    cache: LayeredCache,
    ttl: Duration,
}

impl<O: Orchestrator> CachedOrchestrator<O> {
    pub fn new(inner: O, cache: LayeredCache, ttl: Duration) -> Self {
        CachedOrchestrator { inner, cache, ttl }
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<POI>, OrchestratorError> {
        let key = build_key(query);

        if let Some(cached) = self.cache.get(&key).await {
            metrics::counter!(CACHE_HITS_TOTAL.name).increment(1);
            return Ok(cached);
        }
        metrics::counter!(CACHE_MISSES_TOTAL.name).increment(1);

        let result = self.inner.search(query).await?;
        self.cache.set(&key, result.clone(), self.ttl).await;
        Ok(result)
    }

    /// Delegates to the L2 backend's own ping, for the `/ready` probe.
    pub async fn ping_cache(&self) -> bool {
        self.cache.ping_l2().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cache::MemoryCache;
    use providers::Spatial;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct FakeOrchestrator {
        calls: Arc<AtomicUsize>,
        result: Result<Vec<POI>, OrchestratorError>,
    }

    #[async_trait]
    impl Orchestrator for FakeOrchestrator {
        async fn search(&self, _query: &SearchQuery) -> Result<Vec<POI>, OrchestratorError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    fn query() -> SearchQuery {
        SearchQuery {
            spatial: Spatial::Point {
                lat: 59.3293,
                lng: 18.0686,
                radius: 1000,
            },
            limit: 50,
            categories: vec![],
        }
    }

    fn poi(id: &str) -> POI {
        POI {
            id: id.to_string(),
            name: "Test".to_string(),
            source: "fake".to_string(),
            ..Default::default()
        }
    }

    fn layered_cache() -> LayeredCache {
        LayeredCache::new(MemoryCache::new(), None)
    }

    #[tokio::test]
    async fn cache_hit_never_calls_the_inner_orchestrator_again() {
        let calls = Arc::new(AtomicUsize::new(0));
        let inner = FakeOrchestrator {
            calls: calls.clone(),
            result: Ok(vec![poi("1")]),
        };
        let orchestrator = CachedOrchestrator::new(inner, layered_cache(), Duration::from_secs(60));

        let first = orchestrator.search(&query()).await.unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let second = orchestrator.search(&query()).await.unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1, "second search must be served from cache");
    }

    #[tokio::test]
    async fn cache_miss_calls_inner_and_populates_the_cache() {
        let calls = Arc::new(AtomicUsize::new(0));
        let inner = FakeOrchestrator {
            calls: calls.clone(),
            result: Ok(vec![poi("1")]),
        };
        let cache = layered_cache();
        let key = build_key(&query());
        assert!(cache.get(&key).await.is_none());

        let orchestrator = CachedOrchestrator::new(inner, cache, Duration::from_secs(60));
        let result = orchestrator.search(&query()).await.unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn errors_are_never_cached() {
        let calls = Arc::new(AtomicUsize::new(0));
        let inner = FakeOrchestrator {
            calls: calls.clone(),
            result: Err(OrchestratorError::AllProvidersFailed),
        };
        let orchestrator = CachedOrchestrator::new(inner, layered_cache(), Duration::from_secs(60));

        let first = orchestrator.search(&query()).await;
        assert!(first.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let second = orchestrator.search(&query()).await;
        assert!(second.is_err());
        assert_eq!(
            calls.load(Ordering::SeqCst),
            2,
            "an error response must not be cached, so the inner orchestrator runs again"
        );
    }
}
