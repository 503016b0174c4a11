pub mod cached;
pub mod dedupe;
pub mod error;
pub mod metrics_defs;
pub mod orchestrator;
pub mod parallel;
pub mod rank;

pub use cached::CachedOrchestrator;
pub use error::OrchestratorError;
pub use orchestrator::Orchestrator;
pub use parallel::ParallelOrchestrator;
