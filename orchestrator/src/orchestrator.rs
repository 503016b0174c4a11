use crate::error::OrchestratorError;
use async_trait::async_trait;
use providers::{POI, SearchQuery};

/// Common seam between the `CachedOrchestrator` decorator and whatever it wraps.
/// `ParallelOrchestrator` is the only production implementation; the trait exists
/// so tests can substitute a fake that counts calls without standing up real
/// providers.
#[async_trait]
pub trait Orchestrator: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<POI>, OrchestratorError>;
}
