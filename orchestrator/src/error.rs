#[derive(thiserror::Error, Debug, Clone)]
pub enum OrchestratorError {
    /// Every provider branch produced zero results, error or empty, with at
    /// least one branch attempted. Preserved asymmetry: a cached empty result is a
    /// legitimate answer, but an orchestrator run that ends up with nothing is not.
    #[error("all providers failed or timeout")]
    AllProvidersFailed,
}
