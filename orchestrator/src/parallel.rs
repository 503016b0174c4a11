use crate::dedupe::dedupe;
use crate::error::OrchestratorError;
use crate::metrics_defs::{PROVIDER_DURATION_SECONDS, PROVIDER_ERRORS_TOTAL};
use crate::orchestrator::Orchestrator;
use crate::rank::rank;
use async_trait::async_trait;
use providers::{POI, Provider, RegisteredProvider, SearchQuery};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::warn;

const DEADLINE: Duration = Duration::from_secs(3);

struct Registered {
    provider: Arc<dyn Provider>,
}

/// Fans a query out to every registered, decorator-hardened provider concurrently,
/// bounded by a 3s global deadline, and produces one merged, deduplicated, ranked
/// result list. This is the sole place in the request path that forks concurrency.
pub struct ParallelOrchestrator {
    providers: Vec<Registered>,
    priorities: Arc<HashMap<String, i32>>,
}

impl ParallelOrchestrator {
    pub fn new(registered: Vec<RegisteredProvider>, priorities: Arc<HashMap<String, i32>>) -> Self {
        let providers = registered
            .into_iter()
            .map(|r| Registered { provider: r.provider })
            .collect();
        ParallelOrchestrator {
            providers,
            priorities,
        }
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<POI>, OrchestratorError> {
        let channel_size = self.providers.len().max(1);
        let (tx, mut rx) = mpsc::channel::<Vec<POI>>(channel_size);

        let mut workers: JoinSet<()> = JoinSet::new();
        for registered in &self.providers {
            let provider = registered.provider.clone();
            let query = query.clone();
            let tx = tx.clone();
            workers.spawn(async move {
                let name = provider.name().to_string();
                let started = Instant::now();
                let outcome = provider.search(&query).await;
                metrics::histogram!(PROVIDER_DURATION_SECONDS.name, "provider" => name.clone())
                    .record(started.elapsed().as_secs_f64());

                match outcome {
                    Ok(result) if !result.is_empty() => {
                        // If the deadline already fired, the receiver is gone and this
                        // send simply fails; the result is abandoned, not forced through.
                        let _ = tx.send(result).await;
                    }
                    Ok(_) => {}
                    Err(err) => {
                        metrics::counter!(
                            PROVIDER_ERRORS_TOTAL.name,
                            "provider" => name.clone(),
                            "kind" => err.kind(),
                        )
                        .increment(1);
                        warn!(provider = %name, kind = err.kind(), %err, "provider branch failed");
                    }
                }
            });
        }
        drop(tx);

        // Runs independently of the drain loop below: if the deadline fires first,
        // this keeps draining the JoinSet on its own so worker tasks are never
        // forcibly aborted, only abandoned by the caller.
        tokio::spawn(async move { while workers.join_next().await.is_some() {} });

        let mut merged = Vec::new();
        let sleep = tokio::time::sleep(DEADLINE);
        tokio::pin!(sleep);
        loop {
            tokio::select! {
                received = rx.recv() => {
                    match received {
                        Some(mut result) => merged.append(&mut result),
                        None => break,
                    }
                }
                _ = &mut sleep => break,
            }
        }

        if merged.is_empty() {
            return Err(OrchestratorError::AllProvidersFailed);
        }

        let origin = query.center();
        Ok(rank(dedupe(merged), &self.priorities, origin))
    }
}

#[async_trait]
impl Orchestrator for ParallelOrchestrator {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<POI>, OrchestratorError> {
        ParallelOrchestrator::search(self, query).await
    }
}
