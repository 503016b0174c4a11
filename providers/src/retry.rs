use crate::domain::{POI, SearchQuery};
use crate::provider::{Provider, ProviderError};
use async_trait::async_trait;
use std::time::Duration;

const RETRY_PAUSE: Duration = Duration::from_millis(100);

/// Up to `retries` additional attempts (total <= retries + 1) on any error, with a
/// fixed pause between attempts. A successful attempt short-circuits; the final
/// error is surfaced verbatim.
pub struct Retry<P> {
    inner: P,
    retries: u32,
}

impl<P> Retry<P> {
    pub fn new(inner: P, retries: u32) -> Self {
        Retry { inner, retries }
    }
}

#[async_trait]
impl<P> Provider for Retry<P>
where
    P: Provider,
{
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<POI>, ProviderError> {
        let mut attempt = 0;
        loop {
            match self.inner.search(query).await {
                Ok(result) => return Ok(result),
                Err(err) => {
                    if attempt >= self.retries {
                        return Err(err);
                    }
                    attempt += 1;
                    tokio::time::sleep(RETRY_PAUSE).await;
                }
            }
        }
    }
}
