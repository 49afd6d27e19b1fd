//! Knowledge Base Port - Interface for the document-backed vector store.
//!
//! One optional handle exists per process. The HTTP layer uses it for
//! status and reload requests; the evaluator agent uses it to answer
//! `search_knowledge_base` tool calls.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::knowledge::RetrievedChunk;

use super::ai_provider::AIError;

/// Port for the knowledge store.
#[async_trait]
pub trait KnowledgeBase: Send + Sync {
    /// Returns true if the backing table exists.
    async fn table_exists(&self) -> Result<bool, KnowledgeError>;

    /// Ingests the configured documents.
    ///
    /// With `recreate` every chunk is embedded again and overwritten; without
    /// it chunks already stored are skipped.
    async fn load(&self, recreate: bool) -> Result<LoadSummary, KnowledgeError>;

    /// Returns up to `limit` chunks relevant to `query`, best match first.
    async fn search(&self, query: &str, limit: usize)
        -> Result<Vec<RetrievedChunk>, KnowledgeError>;
}

/// Counts reported by a completed load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub documents: usize,
    pub chunks: usize,
    /// Chunks embedded and written during this load.
    pub written: usize,
    /// Chunks left untouched because they were already stored.
    pub skipped: usize,
}

/// Knowledge store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnowledgeError {
    /// Database query or connection failed.
    #[error("database error: {0}")]
    Database(String),

    /// Embedding generation failed.
    #[error("embedding error: {0}")]
    Embedding(#[from] AIError),

    /// A source document could not be read.
    #[error("failed to read document {name}: {message}")]
    Document { name: String, message: String },

    /// The documents folder could not be listed.
    #[error("failed to read documents folder {path}: {message}")]
    DocsFolder { path: String, message: String },

    /// Embedding vector has an unexpected length.
    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

impl KnowledgeError {
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }
}
