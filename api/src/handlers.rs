use crate::error::ApiError;
use crate::metrics_defs::{REQUEST_DURATION_SECONDS, REQUESTS_TOTAL};
use crate::params::SearchParams;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use providers::POI;
use serde::Serialize;
use std::time::Instant;

#[derive(Serialize)]
pub struct PaginatedResponse {
    data: Vec<POI>,
    total: usize,
    page: u32,
    page_size: u32,
    total_pages: u32,
}

pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<PaginatedResponse>, ApiError> {
    let started = Instant::now();
    let result = search_inner(&state, params).await;

    let status = match &result {
        Ok(_) => StatusCode::OK,
        Err(err) => err.status_code(),
    };
    metrics::histogram!(REQUEST_DURATION_SECONDS.name, "path" => "/v1/search")
        .record(started.elapsed().as_secs_f64());
    metrics::counter!(
        REQUESTS_TOTAL.name,
        "path" => "/v1/search",
        "status" => status.as_u16().to_string(),
    )
    .increment(1);

    result
}

async fn search_inner(
    state: &AppState,
    params: SearchParams,
) -> Result<Json<PaginatedResponse>, ApiError> {
    let (query, pagination) = params.into_query()?;

    let ranked = state.orchestrator.search(&query).await?;

    let total = ranked.len();
    let page_size = pagination.page_size as usize;
    let start = (pagination.page as usize - 1) * page_size;
    let data = ranked.into_iter().skip(start).take(page_size).collect();
    let total_pages = total.div_ceil(page_size) as u32;

    Ok(Json(PaginatedResponse {
        data,
        total,
        page: pagination.page,
        page_size: pagination.page_size,
        total_pages,
    }))
}

pub async fn health() -> &'static str {
    "OK"
}

pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let deadline = tokio::time::Duration::from_secs(2);
    match tokio::time::timeout(deadline, state.orchestrator.ping_cache()).await {
        Ok(true) => (StatusCode::OK, "READY"),
        _ => (StatusCode::SERVICE_UNAVAILABLE, "NOT READY"),
    }
}

pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let body = state.prometheus.render();
    (
        [("content-type", "text/plain; version=0.0.4")],
        body,
    )
}
