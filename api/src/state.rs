use metrics_exporter_prometheus::PrometheusHandle;
use orchestrator::CachedOrchestrator;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<CachedOrchestrator>,
    pub prometheus: PrometheusHandle,
}
