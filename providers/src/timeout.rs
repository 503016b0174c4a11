use crate::domain::{POI, SearchQuery};
use crate::provider::{Provider, ProviderError};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Enforces a per-attempt wall-clock deadline on the wrapped Provider.
///
/// On expiry the in-flight call is *not* cancelled: it is abandoned in a detached
/// task and its eventual result, if any, is simply dropped. Threading a cancellation
/// signal through the inner HTTP call would close this gap but is deliberately left
/// for a future change; this decorator preserves the leak.
pub struct Timeout<P> {
    inner: Arc<P>,
    duration: Duration,
}

impl<P> Timeout<P> {
    pub fn new(inner: P, duration: Duration) -> Self {
        Timeout {
            inner: Arc::new(inner),
            duration,
        }
    }
}

#[async_trait]
impl<P> Provider for Timeout<P>
where
    P: Provider + 'static,
{
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<POI>, ProviderError> {
        let inner = self.inner.clone();
        let query = query.clone();
        let name = self.inner.name().to_string();

        let call = tokio::spawn(async move { inner.search(&query).await });

        match tokio::time::timeout(self.duration, call).await {
            Ok(Ok(result)) => result,
            Ok(Err(_join_error)) => Err(ProviderError::Transport {
                provider: name,
                message: "provider task panicked".to_string(),
            }),
            Err(_elapsed) => Err(ProviderError::Timeout { provider: name }),
        }
    }
}
