use crate::domain::{POI, SearchQuery};
use async_trait::async_trait;

#[derive(thiserror::Error, Debug, Clone)]
pub enum ProviderError {
    #[error("transport error calling {provider}: {message}")]
    Transport { provider: String, message: String },

    #[error("{provider} returned status {status}")]
    Status { provider: String, status: u16 },

    #[error("{provider} timed out")]
    Timeout { provider: String },

    #[error("circuit open for {provider}")]
    CircuitOpen { provider: String },
}

impl ProviderError {
    pub fn provider(&self) -> &str {
        match self {
            ProviderError::Transport { provider, .. } => provider,
            ProviderError::Status { provider, .. } => provider,
            ProviderError::Timeout { provider } => provider,
            ProviderError::CircuitOpen { provider } => provider,
        }
    }

    /// Stable error kind name, for metrics labels and logging, independent of the Display message.
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::Transport { .. } => "ProviderTransport",
            ProviderError::Status { .. } => "ProviderStatus",
            ProviderError::Timeout { .. } => "Timeout",
            ProviderError::CircuitOpen { .. } => "CircuitOpen",
        }
    }
}

/// Uniform interface over one external geographic data source. Exactly one remote
/// call per `search` invocation. An empty, non-error result is a valid "no matches".
#[async_trait]
pub trait Provider: Send + Sync {
    fn name(&self) -> &str;
    async fn search(&self, query: &SearchQuery) -> Result<Vec<POI>, ProviderError>;
}
