//! Integration tests for the full HTTP surface.
//!
//! These tests drive the assembled router end to end:
//! 1. Knowledge is loaded over HTTP and then searched by the agent
//! 2. Tool calls show up in the analysis
//! 3. Earlier evaluations are replayed to the provider

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use hustle_buddy::adapters::ai::MockAIProvider;
use hustle_buddy::adapters::http::{api_router, ApiState};
use hustle_buddy::adapters::knowledge::InMemoryKnowledgeBase;
use hustle_buddy::application::agent::{EvaluatorAgent, SEARCH_KNOWLEDGE_TOOL};
use hustle_buddy::config::AgentConfig;
use hustle_buddy::domain::knowledge::Document;
use hustle_buddy::ports::{KnowledgeBase, MessageRole};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app(provider: &MockAIProvider, knowledge: Option<Arc<dyn KnowledgeBase>>) -> Router {
    let agent = EvaluatorAgent::new(
        AgentConfig::default(),
        Arc::new(provider.clone()),
        knowledge.clone(),
    );
    api_router(
        ApiState::new(Arc::new(agent), knowledge),
        &["http://localhost:3000".to_string()],
    )
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn evaluate(use_knowledge: bool) -> Request<Body> {
    let body = json!({
        "prompt": "Explain X",
        "model1": "X is a letter.",
        "model2": "X is the 24th letter of the alphabet.",
        "model3": "No idea.",
        "use_knowledge": use_knowledge,
    });
    Request::builder()
        .method("POST")
        .uri("/evaluate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test]
async fn knowledge_backed_evaluation() {
    let kb: Arc<dyn KnowledgeBase> = Arc::new(InMemoryKnowledgeBase::new(vec![Document::new(
        "rubric",
        "Accuracy matters most. Reward complete answers.",
    )]));
    let provider = MockAIProvider::new()
        .with_tool_call(SEARCH_KNOWLEDGE_TOOL, r#"{"query": "accuracy"}"#)
        .with_response("Model 2 is the most accurate.");
    let app = app(&provider, Some(kb));

    let (status, body) = send(&app, post("/load-knowledge?recreate=true")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");

    let (_, body) = send(
        &app,
        Request::builder().uri("/knowledge-status").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(body["status"], "ready");

    let (status, body) = send(&app, evaluate(true)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["metadata"]["knowledge_used"], true);
    assert_eq!(
        body["analysis"],
        " - Running: search_knowledge_base(query=accuracy)\n\nModel 2 is the most accurate."
    );

    let calls = provider.get_calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].tools.len(), 1);
    let tool_result = calls[1]
        .messages
        .iter()
        .find(|m| m.role == MessageRole::Tool)
        .unwrap();
    assert!(tool_result.content.contains("Accuracy matters most."));
}

#[tokio::test]
async fn earlier_evaluations_are_replayed() {
    let provider = MockAIProvider::new()
        .with_response("first analysis")
        .with_response("second analysis");
    let app = app(&provider, None);

    let (_, first) = send(&app, evaluate(false)).await;
    let (_, second) = send(&app, evaluate(false)).await;

    assert_eq!(first["metadata"]["session_id"], second["metadata"]["session_id"]);

    let calls = provider.get_calls();
    let replayed: Vec<&str> = calls[1]
        .messages
        .iter()
        .filter(|m| m.role == MessageRole::Assistant)
        .map(|m| m.content.as_str())
        .collect();
    assert_eq!(replayed, vec!["first analysis"]);
}

#[tokio::test]
async fn service_endpoints_without_knowledge() {
    let provider = MockAIProvider::new();
    let app = app(&provider, None);

    let (status, body) = send(
        &app,
        Request::builder().uri("/").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["features"]["knowledge_base"], false);

    let (status, body) = send(&app, post("/load-knowledge")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "No knowledge base available");

    let (status, body) = send(&app, evaluate(true)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["metadata"]["knowledge_used"], false);
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn oversized_prompt_through_full_router_is_400() {
    let provider = MockAIProvider::new();
    let app = app(&provider, None);
    let body = json!({
        "prompt": "p".repeat(2_200_000),
        "model1": "A",
        "model2": "B",
        "model3": "C",
    });
    let request = Request::builder()
        .method("POST")
        .uri("/evaluate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Prompt too long (max 10,000 characters)");
    assert_eq!(provider.call_count(), 0);
}
