//! Route configuration for the knowledge base endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::super::state::ApiState;
use super::handlers::{knowledge_status, load_knowledge};

/// Creates the knowledge router.
///
/// Routes:
/// - `GET /knowledge-status` - Check knowledge base status
/// - `POST /load-knowledge` - Load/reload knowledge base (`?recreate=bool`)
pub fn knowledge_router() -> Router<ApiState> {
    Router::new()
        .route("/knowledge-status", get(knowledge_status))
        .route("/load-knowledge", post(load_knowledge))
}
