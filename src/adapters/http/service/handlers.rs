//! HTTP handlers for service discovery and liveness.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use super::super::state::ApiState;
use super::dto::{HealthResponse, ServiceInfoResponse};

/// GET / - Service description
pub async fn service_info(State(state): State<ApiState>) -> impl IntoResponse {
    Json(ServiceInfoResponse::new(state.knowledge_available()))
}

/// GET /health - Health check
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse::healthy())
}
