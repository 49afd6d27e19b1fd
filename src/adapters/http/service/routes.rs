//! Route configuration for the service endpoints.

use axum::routing::get;
use axum::Router;

use super::super::state::ApiState;
use super::handlers::{health, service_info};

/// Creates the service router.
///
/// Routes:
/// - `GET /` - Service description
/// - `GET /health` - Health check
pub fn service_router() -> Router<ApiState> {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::adapters::knowledge::InMemoryKnowledgeBase;
    use crate::application::agent::EvaluatorAgent;
    use crate::config::AgentConfig;
    use crate::ports::KnowledgeBase;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(knowledge: Option<Arc<dyn KnowledgeBase>>) -> Router {
        let agent = EvaluatorAgent::new(
            AgentConfig::default(),
            Arc::new(MockAIProvider::new()),
            knowledge.clone(),
        );
        service_router().with_state(ApiState::new(Arc::new(agent), knowledge))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_is_fixed() {
        let (status, body) = get_json(app(None), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "healthy", "service": "Hustle Buddy API"}));
    }

    #[tokio::test]
    async fn root_lists_endpoints() {
        let (status, body) = get_json(app(None), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["message"],
            "Hustle Buddy API is running! Use POST /evaluate to analyze AI model responses."
        );
        assert_eq!(body["endpoints"]["evaluate"], "POST /evaluate - Compare AI model responses");
        assert_eq!(body["endpoints"]["health"], "GET /health - Health check");
        assert_eq!(body["endpoints"].as_object().unwrap().len(), 4);
        assert_eq!(body["features"], json!({"knowledge_base": false}));
    }

    #[tokio::test]
    async fn root_reports_knowledge_feature() {
        let kb: Arc<dyn KnowledgeBase> = Arc::new(InMemoryKnowledgeBase::new(Vec::new()));
        let (_, body) = get_json(app(Some(kb)), "/").await;
        assert_eq!(body["features"]["knowledge_base"], true);
    }
}
