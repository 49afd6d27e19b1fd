//! Embedding Port - Interface for text embedding providers.
//!
//! Converts text into dense vectors for similarity search in the
//! knowledge store.

use async_trait::async_trait;

use super::ai_provider::AIError;

/// Port for embedding providers.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embedding dimension for this provider/model.
    fn dimension(&self) -> usize;

    /// Generates embeddings for several texts, in input order.
    ///
    /// Implementations split the input when the provider has per-request limits.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, AIError>;

    /// Generates an embedding for a single text.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, AIError> {
        self.embed_batch(&[text.to_string()])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AIError::parse("Empty embedding response"))
    }
}
