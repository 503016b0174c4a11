pub mod error;
pub mod handlers;
pub mod metrics_defs;
pub mod params;
pub mod state;

use axum::Router;
use axum::http::Method;
use axum::routing::get;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use orchestrator::CachedOrchestrator;
use state::AppState;
use std::sync::{Arc, OnceLock};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

static PROMETHEUS: OnceLock<PrometheusHandle> = OnceLock::new();

fn prometheus_handle() -> PrometheusHandle {
    PROMETHEUS
        .get_or_init(|| {
            PrometheusBuilder::new()
                .install_recorder()
                .expect("installing the process-wide Prometheus recorder")
        })
        .clone()
}

pub fn build_router(orchestrator: Arc<CachedOrchestrator>) -> Router {
    let prometheus = prometheus_handle();

    let state = AppState {
        orchestrator,
        prometheus,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/v1/search", get(handlers::search))
        .route("/health", get(handlers::health))
        .route("/ready", get(handlers::ready))
        .route("/metrics", get(handlers::metrics))
        .layer(cors)
        .with_state(state)
}

pub async fn serve(host: &str, port: u16, orchestrator: Arc<CachedOrchestrator>) -> std::io::Result<()> {
    let app = build_router(orchestrator);
    let addr = format!("{host}:{port}");
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "hynek-poi listening");
    axum::serve(listener, app).await
}
