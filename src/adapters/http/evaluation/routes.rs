//! Route configuration for the evaluation endpoint.

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use super::super::state::ApiState;
use super::handlers::evaluate_models;

/// Creates the evaluation router.
///
/// Routes:
/// - `POST /evaluate` - Compare AI model responses
///
/// The body size is not capped, so oversized fields always reach the
/// validator and get its 400 message.
pub fn evaluation_router() -> Router<ApiState> {
    Router::new()
        .route("/evaluate", post(evaluate_models))
        .layer(DefaultBodyLimit::disable())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::adapters::knowledge::InMemoryKnowledgeBase;
    use crate::application::agent::EvaluatorAgent;
    use crate::config::AgentConfig;
    use crate::domain::evaluation::KNOWLEDGE_HINT;
    use crate::ports::KnowledgeBase;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(provider: MockAIProvider, knowledge: Option<Arc<dyn KnowledgeBase>>) -> Router {
        let agent = EvaluatorAgent::new(AgentConfig::default(), Arc::new(provider), knowledge.clone());
        evaluation_router().with_state(ApiState::new(Arc::new(agent), knowledge))
    }

    fn post_json(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/evaluate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn valid_body() -> Value {
        json!({"prompt": "Explain X", "model1": "A", "model2": "B", "model3": "C"})
    }

    #[tokio::test]
    async fn successful_evaluation_returns_envelope() {
        let provider = MockAIProvider::new().with_response("Model 1 is best");
        let (status, body) = send(app(provider, None), post_json(valid_body().to_string())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        assert_eq!(body["analysis"], "Model 1 is best");
        assert_eq!(body["metadata"]["prompt_length"], 9);
        assert_eq!(body["metadata"]["model1_length"], 1);
        assert_eq!(body["metadata"]["knowledge_used"], false);
        assert!(body["metadata"]["session_id"].is_string());
    }

    #[tokio::test]
    async fn knowledge_request_without_handle_is_downgraded() {
        let provider = MockAIProvider::new().with_response("ok");
        let mut body = valid_body();
        body["use_knowledge"] = json!(true);

        let (status, body) = send(app(provider.clone(), None), post_json(body.to_string())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["metadata"]["knowledge_used"], false);
        let calls = provider.get_calls();
        let sent = &calls[0].messages.last().unwrap().content;
        assert!(!sent.contains(KNOWLEDGE_HINT));
    }

    #[tokio::test]
    async fn knowledge_request_with_handle_adds_hint() {
        let provider = MockAIProvider::new().with_response("ok");
        let knowledge: Arc<dyn KnowledgeBase> = Arc::new(InMemoryKnowledgeBase::new(Vec::new()));
        let mut body = valid_body();
        body["use_knowledge"] = json!(true);

        let (status, body) =
            send(app(provider.clone(), Some(knowledge)), post_json(body.to_string())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["metadata"]["knowledge_used"], true);
        let calls = provider.get_calls();
        let sent = &calls[0].messages.last().unwrap().content;
        assert!(sent.ends_with(KNOWLEDGE_HINT));
    }

    #[tokio::test]
    async fn whitespace_field_is_422_and_agent_not_called() {
        let provider = MockAIProvider::new();
        let mut body = valid_body();
        body["model1"] = json!("   ");

        let (status, body) = send(app(provider.clone(), None), post_json(body.to_string())).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "Invalid request format");
        assert!(body["details"].as_str().unwrap().contains("Field cannot be empty"));
        assert!(body["tip"].as_str().unwrap().starts_with("Make sure your JSON"));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn malformed_json_is_422() {
        let provider = MockAIProvider::new();
        let (status, body) = send(app(provider.clone(), None), post_json("{not json")).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "Invalid request format");
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn missing_field_is_422() {
        let (status, _) = send(
            app(MockAIProvider::new(), None),
            post_json(json!({"prompt": "p"}).to_string()),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn oversized_prompt_is_400() {
        let provider = MockAIProvider::new();
        let mut body = valid_body();
        body["prompt"] = json!("p".repeat(10_001));

        let (status, body) = send(app(provider.clone(), None), post_json(body.to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Prompt too long (max 10,000 characters)");
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn oversized_response_names_field() {
        let mut body = valid_body();
        body["model2"] = json!("m".repeat(50_001));

        let (status, body) =
            send(app(MockAIProvider::new(), None), post_json(body.to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "model2 response too long (max 50,000 characters)");
    }

    #[tokio::test]
    async fn response_larger_than_default_body_limit_is_400() {
        let provider = MockAIProvider::new();
        let mut body = valid_body();
        body["model1"] = json!("m".repeat(2_200_000));

        let (status, body) = send(app(provider.clone(), None), post_json(body.to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "model1 response too long (max 50,000 characters)");
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn agent_failure_is_500_with_prefix() {
        let provider = MockAIProvider::new().with_error(MockError::AuthenticationFailed);

        let (status, body) = send(app(provider, None), post_json(valid_body().to_string())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], "Error during evaluation: authentication failed");
    }
}
