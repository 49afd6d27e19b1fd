//! OpenAI embedding provider adapter.
//!
//! Calls the `/embeddings` endpoint of any OpenAI-compatible API. Inputs are
//! sent in batches of at most [`MAX_BATCH_SIZE`] texts and results are
//! returned in input order.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::{AiConfig, KnowledgeConfig};
use crate::ports::{AIError, EmbeddingProvider};

/// Texts per embeddings request.
pub const MAX_BATCH_SIZE: usize = 100;

/// Configuration for the OpenAI embedding provider.
#[derive(Debug, Clone)]
pub struct OpenAIEmbeddingConfig {
    api_key: Secret<String>,
    /// Base URL for the API (default: https://api.openai.com/v1).
    pub base_url: String,
    /// Embedding model (default: text-embedding-3-small).
    pub model: String,
    /// Expected embedding dimension (default: 1536).
    pub dimension: usize,
    /// Request timeout.
    pub timeout: Duration,
}

impl OpenAIEmbeddingConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: "https://api.openai.com/v1".to_string(),
            model: "text-embedding-3-small".to_string(),
            dimension: 1536,
            timeout: Duration::from_secs(60),
        }
    }

    /// Combines the API credentials with the knowledge base model settings.
    pub fn from_app_config(ai: &AiConfig, knowledge: &KnowledgeConfig) -> Self {
        Self::new(ai.api_key_or_empty())
            .with_base_url(ai.base_url.clone())
            .with_model(knowledge.embedding_model.clone(), knowledge.embedding_dimensions)
            .with_timeout(ai.timeout())
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>, dimension: usize) -> Self {
        self.model = model.into();
        self.dimension = dimension;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// OpenAI embedding provider.
pub struct OpenAIEmbeddingProvider {
    config: OpenAIEmbeddingConfig,
    client: Client,
}

impl OpenAIEmbeddingProvider {
    pub fn new(config: OpenAIEmbeddingConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::InvalidRequest(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    fn embeddings_url(&self) -> String {
        format!("{}/embeddings", self.config.base_url.trim_end_matches('/'))
    }

    fn embeddings_request<'a>(&'a self, texts: &'a [String]) -> EmbeddingsRequest<'a> {
        EmbeddingsRequest {
            model: &self.config.model,
            input: texts,
            dimensions: Some(self.config.dimension),
        }
    }

    async fn call_embeddings_api(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, AIError> {
        let request_body = self.embeddings_request(texts);

        let response = self
            .client
            .post(self.embeddings_url())
            .header(
                "Authorization",
                format!("Bearer {}", self.config.api_key.expose_secret()),
            )
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AIError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else {
                    AIError::network(format!("Embedding API request failed: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 => AIError::AuthenticationFailed,
                429 => AIError::rate_limited(30),
                500..=599 => AIError::unavailable(format!("Embedding API returned {}: {}", status, body)),
                _ => AIError::InvalidRequest(format!("Embedding API returned {}: {}", status, body)),
            });
        }

        let result: EmbeddingsResponse = response
            .json()
            .await
            .map_err(|e| AIError::parse(format!("Failed to parse embedding response: {}", e)))?;

        order_embeddings(result, texts.len())
    }
}

/// Sorts response items by index and checks that every input got one vector.
fn order_embeddings(response: EmbeddingsResponse, expected: usize) -> Result<Vec<Vec<f32>>, AIError> {
    let mut data = response.data;
    data.sort_by_key(|d| d.index);

    if data.len() != expected {
        return Err(AIError::parse(format!(
            "expected {} embeddings, got {}",
            expected,
            data.len()
        )));
    }

    Ok(data.into_iter().map(|d| d.embedding).collect())
}

#[async_trait]
impl EmbeddingProvider for OpenAIEmbeddingProvider {
    fn dimension(&self) -> usize {
        self.config.dimension
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, AIError> {
        let mut vectors = Vec::with_capacity(texts.len());

        for batch in texts.chunks(MAX_BATCH_SIZE) {
            tracing::debug!(batch_size = batch.len(), "requesting embeddings");
            vectors.extend(self.call_embeddings_api(batch).await?);
        }

        Ok(vectors)
    }
}

// -- OpenAI API request/response types --

#[derive(Debug, Serialize)]
struct EmbeddingsRequest<'a> {
    model: &'a str,
    input: &'a [String],
    /// Requested vector size; `text-embedding-3-*` models shorten to it.
    #[serde(skip_serializing_if = "Option::is_none")]
    dimensions: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingsResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
    index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_config() {
        let config = OpenAIEmbeddingConfig::new("key");
        assert_eq!(config.model, "text-embedding-3-small");
        assert_eq!(config.dimension, 1536);
        assert_eq!(config.base_url, "https://api.openai.com/v1");
    }

    #[test]
    fn config_from_app_settings() {
        let knowledge = KnowledgeConfig {
            embedding_model: "text-embedding-3-large".to_string(),
            embedding_dimensions: 3072,
            ..KnowledgeConfig::default()
        };
        let config = OpenAIEmbeddingConfig::from_app_config(&AiConfig::default(), &knowledge);

        assert_eq!(config.model, "text-embedding-3-large");
        assert_eq!(config.dimension, 3072);
    }

    #[test]
    fn request_body_shape() {
        let texts = vec!["a".to_string(), "b".to_string()];
        let body = serde_json::to_value(EmbeddingsRequest {
            model: "text-embedding-3-small",
            input: &texts,
            dimensions: None,
        })
        .unwrap();
        assert_eq!(body, json!({"model": "text-embedding-3-small", "input": ["a", "b"]}));
    }

    #[test]
    fn request_body_carries_configured_dimensions() {
        let provider = OpenAIEmbeddingProvider::new(
            OpenAIEmbeddingConfig::new("key").with_model("text-embedding-3-small", 512),
        )
        .unwrap();
        let texts = vec!["a".to_string()];
        let body = serde_json::to_value(provider.embeddings_request(&texts)).unwrap();
        assert_eq!(
            body,
            json!({"model": "text-embedding-3-small", "input": ["a"], "dimensions": 512})
        );
    }

    #[test]
    fn embeddings_are_returned_in_input_order() {
        let response: EmbeddingsResponse = serde_json::from_value(json!({
            "data": [
                {"embedding": [2.0], "index": 1},
                {"embedding": [1.0], "index": 0}
            ]
        }))
        .unwrap();

        let vectors = order_embeddings(response, 2).unwrap();
        assert_eq!(vectors, vec![vec![1.0], vec![2.0]]);
    }

    #[test]
    fn missing_embeddings_are_a_parse_error() {
        let response: EmbeddingsResponse =
            serde_json::from_value(json!({"data": [{"embedding": [1.0], "index": 0}]})).unwrap();
        assert!(matches!(order_embeddings(response, 2), Err(AIError::Parse(_))));
    }
}
