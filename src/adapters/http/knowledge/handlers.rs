//! HTTP handlers for the knowledge base endpoints.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::application::handlers::{LoadKnowledgeCommand, LoadKnowledgeError};

use super::super::error::ApiError;
use super::super::state::ApiState;
use super::dto::{KnowledgeStatusResponse, LoadKnowledgeQuery, LoadKnowledgeResponse};

/// GET /knowledge-status - Check knowledge base status
pub async fn knowledge_status(State(state): State<ApiState>) -> impl IntoResponse {
    let report = state.knowledge_status_handler().handle().await;
    Json(KnowledgeStatusResponse::from(report))
}

/// POST /load-knowledge - Load/reload knowledge base
pub async fn load_knowledge(
    State(state): State<ApiState>,
    query: Result<Query<LoadKnowledgeQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;

    state
        .load_knowledge_handler()
        .handle(LoadKnowledgeCommand {
            recreate: query.recreate,
        })
        .await?;

    Ok(Json(LoadKnowledgeResponse::success()))
}

impl From<LoadKnowledgeError> for ApiError {
    fn from(err: LoadKnowledgeError) -> Self {
        match err {
            LoadKnowledgeError::NoKnowledgeBase => {
                ApiError::BadRequest(LoadKnowledgeError::NoKnowledgeBase.to_string())
            }
            LoadKnowledgeError::Upstream(msg) => {
                ApiError::Internal(format!("Error loading knowledge base: {}", msg))
            }
        }
    }
}
